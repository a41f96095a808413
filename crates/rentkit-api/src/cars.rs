//! Car and category endpoints

use serde_json::json;

use crate::client::ApiClient;
use crate::error::Result;
use crate::resources::{Car, CarList, CarQuery, CarRequest, Category};
use crate::transport::Method;

impl ApiClient {
	/// Lists cars with the given search/filter/pagination parameters
	pub async fn list_cars(&self, query: &CarQuery) -> Result<CarList> {
		self.fetch(Method::Get, "cars", &query.to_pairs(), None, None)
			.await
	}

	/// Lists the car categories
	pub async fn categories(&self) -> Result<Vec<Category>> {
		self.fetch(
			Method::Get,
			"cars",
			&[("action", "categories".to_string())],
			None,
			None,
		)
		.await
	}

	/// Creates a car (admin)
	pub async fn create_car(&self, token: &str, car: &CarRequest) -> Result<Car> {
		self.fetch(
			Method::Post,
			"cars",
			&[],
			Some(token),
			Some(json!(car)),
		)
		.await
	}

	/// Updates a car (admin)
	pub async fn update_car(&self, token: &str, id: i64, car: &CarRequest) -> Result<Car> {
		self.fetch(
			Method::Put,
			"cars",
			&[("id", id.to_string())],
			Some(token),
			Some(json!(car)),
		)
		.await
	}

	/// Deletes a car (admin)
	pub async fn delete_car(&self, token: &str, id: i64) -> Result<()> {
		self.fetch_unit(
			Method::Delete,
			"cars",
			&[("id", id.to_string())],
			Some(token),
			None,
		)
		.await
	}
}
