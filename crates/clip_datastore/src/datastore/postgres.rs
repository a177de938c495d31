use anyhow::Context;
use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};

use crate::{datastore::DataStore, Video};

static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, Clone)]
pub struct PgDataStore {
    pub pool: PgPool,
}

impl PgDataStore {
    /// Establish connection to database and create the videos table
    /// if not exists
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .inspect_err(
                |e| tracing::error!(error = ?e, "Failed to establish connection to database"),
            )
            .context("Failed to connect to postgres database")?;

        MIGRATOR
            .run(&pool)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to run database migrations"))
            .context("Failed to run database migrations")?;

        Ok(PgDataStore { pool })
    }
}

impl DataStore for PgDataStore {
    async fn insert_video(&self, video: &Video) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO videos (video_id, title, url, channel, timestamp, summary, tldr)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (video_id) DO NOTHING
            "#,
        )
        .bind(&video.video_id)
        .bind(&video.title)
        .bind(&video.url)
        .bind(&video.channel)
        .bind(video.timestamp)
        .bind(&video.summary)
        .bind(&video.tldr)
        .execute(&self.pool)
        .await
        .inspect_err(|err| {
            tracing::error!(
                error = ?err,
                video_id = %video.video_id,
                "Failed to insert video"
            )
        })
        .context("Failed to insert video")?;

        Ok(())
    }

    async fn update_summary(&self, video_id: &str, summary: &str, tldr: &str) -> anyhow::Result<()> {
        let result = sqlx::query("UPDATE videos SET summary = $2, tldr = $3 WHERE video_id = $1")
            .bind(video_id)
            .bind(summary)
            .bind(tldr)
            .execute(&self.pool)
            .await
            .inspect_err(|err| {
                tracing::error!(error = ?err, video_id = %video_id, "Failed to update summary")
            })
            .context("Failed to update video summary")?;

        if result.rows_affected() == 0 {
            anyhow::bail!("No tracked video with id {video_id}");
        }

        Ok(())
    }

    async fn list_videos(&self) -> anyhow::Result<Vec<Video>> {
        let videos = sqlx::query_as::<_, Video>(
            "SELECT video_id, title, url, channel, timestamp, summary, tldr \
             FROM videos ORDER BY timestamp DESC",
        )
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "Failed to fetch videos"))
        .context("Failed to fetch videos")?;

        Ok(videos)
    }
}
