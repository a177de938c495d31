use std::sync::{Arc, Mutex};

use clip_datastore::{DataStore, Video};

#[derive(Clone, Default)]
pub struct MockDataStore {
    pub inserted: Arc<Mutex<Vec<Video>>>,
    pub updates: Arc<Mutex<Vec<(String, String, String)>>>,
    pub videos: Arc<Mutex<Vec<Video>>>,
    pub fail_with: Option<String>,
}

impl MockDataStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl DataStore for MockDataStore {
    async fn insert_video(&self, video: &Video) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.inserted.lock().unwrap().push(video.clone());
        self.videos.lock().unwrap().push(video.clone());
        Ok(())
    }

    async fn update_summary(&self, video_id: &str, summary: &str, tldr: &str) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.updates.lock().unwrap().push((
            video_id.to_string(),
            summary.to_string(),
            tldr.to_string(),
        ));
        for video in self.videos.lock().unwrap().iter_mut() {
            if video.video_id == video_id {
                video.summary = Some(summary.to_string());
                video.tldr = Some(tldr.to_string());
            }
        }
        Ok(())
    }

    async fn list_videos(&self) -> anyhow::Result<Vec<Video>> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.videos.lock().unwrap().clone())
    }
}
