use crate::room::code::RoomCode;
use crate::room::model::{NewRoom, Room, RoomField, RoomId};
use crate::store::Store;
use crate::store::error::{IntoStoreResult, StoreError};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool, migrate, query, query_as, query_scalar};
use std::str::FromStr;

#[cfg(test)]
pub mod test_utils;

#[derive(Clone)]
pub struct SqliteStore {
	pool: SqlitePool,
}

impl SqliteStore {
	pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
		let options = SqliteConnectOptions::from_str(database_url)
			.connection_error("Invalid database URL")?
			.create_if_missing(true);

		// Every new connection to an in-memory database opens a fresh, empty database.
		let pool_options = if is_in_memory(database_url) {
			SqlitePoolOptions::new()
				.min_connections(1)
				.max_connections(1)
				.idle_timeout(None)
				.max_lifetime(None)
		} else {
			SqlitePoolOptions::new()
		};

		let pool = pool_options
			.connect_with(options)
			.await
			.connection_error("Failed to connect to database")?;
		let store = Self { pool };
		store.migrate().await?;

		Ok(store)
	}

	async fn migrate(&self) -> Result<(), StoreError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}
}

fn is_in_memory(database_url: &str) -> bool {
	database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl Store for SqliteStore {
	async fn find_room_by_code(&self, code: &RoomCode) -> Result<Option<Room>, StoreError> {
		query_as(
			r"SELECT id, code, track_url, is_playing, position, updated_at
			FROM room
			WHERE code = ?1",
		)
		.bind(code.as_str())
		.fetch_optional(&self.pool)
		.await
		.map_err(Into::into)
	}

	async fn find_room(&self, room_id: RoomId) -> Result<Option<Room>, StoreError> {
		query_as(
			r"SELECT id, code, track_url, is_playing, position, updated_at
			FROM room
			WHERE id = ?1",
		)
		.bind(room_id)
		.fetch_optional(&self.pool)
		.await
		.map_err(Into::into)
	}

	async fn insert_room(
		&self,
		NewRoom {
			code,
			track_url,
			updated_at,
		}: NewRoom,
	) -> Result<RoomId, StoreError> {
		let room_id = RoomId::new_v4();
		query(
			r"INSERT INTO room (id, code, track_url, is_playing, position, updated_at)
			VALUES (?1, ?2, ?3, FALSE, 0.0, ?4)",
		)
		.bind(room_id)
		.bind(code.as_str())
		.bind(track_url)
		.bind(updated_at)
		.execute(&self.pool)
		.await?;

		Ok(room_id)
	}

	async fn update_room_fields(&self, room_id: RoomId, fields: &[RoomField]) -> Result<(), StoreError> {
		if fields.is_empty() {
			return Ok(());
		}

		let mut builder = QueryBuilder::<Sqlite>::new("UPDATE room SET ");
		{
			let mut assignments = builder.separated(", ");
			for field in fields {
				match field {
					RoomField::IsPlaying(is_playing) => {
						assignments.push("is_playing = ").push_bind_unseparated(*is_playing)
					}
					RoomField::Position(position) => {
						assignments.push("position = ").push_bind_unseparated(position.seconds())
					}
					RoomField::TrackUrl(track_url) => {
						assignments.push("track_url = ").push_bind_unseparated(track_url.clone())
					}
					RoomField::UpdatedAt(updated_at) => {
						assignments.push("updated_at = ").push_bind_unseparated(*updated_at)
					}
				};
			}
		}
		builder.push(" WHERE id = ").push_bind(room_id);

		let result = builder.build().execute(&self.pool).await?;
		if result.rows_affected() == 0 {
			return Err(StoreError::NotFound);
		}

		Ok(())
	}

	async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
		query_scalar(
			r"SELECT name
			FROM sqlite_master
			WHERE type = 'table'
				AND name NOT LIKE 'sqlite\_%' ESCAPE '\'
				AND name NOT LIKE '\_sqlx\_%' ESCAPE '\'
			ORDER BY name",
		)
		.fetch_all(&self.pool)
		.await
		.map_err(Into::into)
	}

	async fn close(&self) {
		self.pool.close().await;
	}
}
