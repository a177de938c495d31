use std::future::Future;

pub mod postgres;

pub trait DataStore {
    fn insert_video(&self, video: &crate::Video) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn update_summary(
        &self,
        video_id: &str,
        summary: &str,
        tldr: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn list_videos(&self) -> impl Future<Output = anyhow::Result<Vec<crate::Video>>> + Send;
}

impl<T: DataStore + Send + Sync> DataStore for &T {
    async fn insert_video(&self, video: &crate::Video) -> anyhow::Result<()> {
        (**self).insert_video(video).await
    }

    async fn update_summary(&self, video_id: &str, summary: &str, tldr: &str) -> anyhow::Result<()> {
        (**self).update_summary(video_id, summary, tldr).await
    }

    async fn list_videos(&self) -> anyhow::Result<Vec<crate::Video>> {
        (**self).list_videos().await
    }
}
