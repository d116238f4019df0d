//! Black-box HTTP tests running the real router on an ephemeral port.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use reqwest::{header, StatusCode};
use sea_orm::{Database, DatabaseConnection, DbErr};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

use crate::server::{
    data::{CampRepository, Repository, SeaOrmRepository, SpeakerRepository, TalkRepository},
    link::LinkGenerator,
    model::{
        camp::{Camp, CampFields},
        speaker::{Speaker, SpeakerFields},
        talk::{Talk, TalkFields},
    },
    router,
    state::AppState,
};


/// Running API instance with its own in-memory database.
struct TestServer {
    base: String,
    client: reqwest::Client,
}

impl TestServer {
    /// Starts the API over a freshly migrated in-memory database.
    async fn start() -> Self {
        let db = migrated_database().await;

        Self::with_repository(Arc::new(SeaOrmRepository::new(db))).await
    }

    async fn with_repository(repository: Arc<dyn Repository>) -> Self {
        let links = LinkGenerator::new(Url::parse("http://localhost:8080").unwrap());
        let app = router::app(AppState::new(repository, links));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{}", addr),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    async fn put(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    /// Creates a camp through the API and returns its moniker.
    async fn create_camp(&self, moniker: &str, event_date: &str) -> String {
        let response = self
            .post(
                "/api/camps",
                &json!({ "moniker": moniker, "name": "Code Camp", "eventDate": event_date }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        moniker.to_string()
    }

    /// Creates a speaker through the API and returns its ID.
    async fn create_speaker(&self, last_name: &str) -> i64 {
        let response = self
            .post(
                "/api/speakers",
                &json!({ "firstName": "Test", "lastName": last_name }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = response.json().await.unwrap();
        body["speakerId"].as_i64().unwrap()
    }

    /// Creates a talk through the API and returns its ID.
    async fn create_talk(&self, moniker: &str, speaker_id: i64) -> i64 {
        let response = self
            .post(
                &format!("/api/camps/{}/talks", moniker),
                &json!({ "title": "A Talk", "abstract": "About things", "level": 100, "speaker": { "speakerId": speaker_id } }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = response.json().await.unwrap();
        body["talkId"].as_i64().unwrap()
    }
}

async fn migrated_database() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn location(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn error_code(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["code"].as_str().unwrap_or_default().to_string()
}

/// Repository whose store is unreachable.
struct UnavailableRepository;

const UNAVAILABLE: &str = "connection refused by db-internal-7:5432";

fn unavailable() -> DbErr {
    DbErr::Custom(UNAVAILABLE.to_string())
}

#[async_trait]
impl CampRepository for UnavailableRepository {
    async fn get_all_camps(&self, _: bool) -> Result<Vec<Camp>, DbErr> {
        Err(unavailable())
    }

    async fn get_camps_by_event_date(&self, _: NaiveDate, _: bool) -> Result<Vec<Camp>, DbErr> {
        Err(unavailable())
    }

    async fn get_camp(&self, _: &str, _: bool) -> Result<Option<Camp>, DbErr> {
        Err(unavailable())
    }

    async fn create_camp(&self, _: String, _: CampFields) -> Result<Camp, DbErr> {
        Err(unavailable())
    }

    async fn update_camp(&self, _: i32, _: CampFields) -> Result<Camp, DbErr> {
        Err(unavailable())
    }

    async fn delete_camp(&self, _: i32) -> Result<(), DbErr> {
        Err(unavailable())
    }
}

#[async_trait]
impl TalkRepository for UnavailableRepository {
    async fn get_talks_by_moniker(&self, _: &str, _: bool) -> Result<Vec<Talk>, DbErr> {
        Err(unavailable())
    }

    async fn get_talk_by_moniker(&self, _: &str, _: i32, _: bool) -> Result<Option<Talk>, DbErr> {
        Err(unavailable())
    }

    async fn create_talk(&self, _: i32, _: i32, _: TalkFields) -> Result<Talk, DbErr> {
        Err(unavailable())
    }

    async fn update_talk(&self, _: i32, _: TalkFields, _: Option<i32>) -> Result<Talk, DbErr> {
        Err(unavailable())
    }

    async fn delete_talk(&self, _: i32) -> Result<(), DbErr> {
        Err(unavailable())
    }
}

#[async_trait]
impl SpeakerRepository for UnavailableRepository {
    async fn get_all_speakers(&self) -> Result<Vec<Speaker>, DbErr> {
        Err(unavailable())
    }

    async fn get_speakers_by_moniker(&self, _: &str) -> Result<Vec<Speaker>, DbErr> {
        Err(unavailable())
    }

    async fn get_speaker(&self, _: i32) -> Result<Option<Speaker>, DbErr> {
        Err(unavailable())
    }

    async fn create_speaker(&self, _: SpeakerFields) -> Result<Speaker, DbErr> {
        Err(unavailable())
    }

    async fn update_speaker(&self, _: i32, _: SpeakerFields) -> Result<Speaker, DbErr> {
        Err(unavailable())
    }

    async fn delete_speaker(&self, _: i32) -> Result<(), DbErr> {
        Err(unavailable())
    }
}
