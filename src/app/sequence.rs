use crate::api::BillingClient;
use crate::utils::error::{BillingError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Instant;

/// 一個可執行的範例章節。
#[async_trait]
pub trait Chapter: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    async fn run(&self, api: &BillingClient) -> Result<()>;
}

/// 章節執行結果
#[derive(Debug, Clone)]
pub struct ChapterResult {
    pub chapter_name: String,
    pub duration: std::time::Duration,
}

/// 依序執行多個章節，並記錄每章的執行時間。
pub struct ChapterSequence {
    chapters: Vec<Box<dyn Chapter>>,
}

impl ChapterSequence {
    pub fn new() -> Self {
        Self {
            chapters: Vec::new(),
        }
    }

    pub fn add_chapter(&mut self, chapter: Box<dyn Chapter>) {
        self.chapters.push(chapter);
    }

    pub fn chapters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chapters.iter().map(|c| (c.name(), c.description()))
    }

    pub fn find(&self, name: &str) -> Option<&dyn Chapter> {
        self.chapters
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// 執行單一章節
    pub async fn execute(&self, api: &BillingClient, name: &str) -> Result<ChapterResult> {
        let chapter = self
            .find(name)
            .ok_or_else(|| BillingError::ProcessingError {
                message: format!("Unknown chapter: {}", name),
            })?;

        let start_time = Instant::now();
        tracing::info!("🚀 Running chapter: {}", chapter.name());
        chapter.run(api).await?;
        let duration = start_time.elapsed();
        tracing::info!("✅ Chapter finished: {} ({:?})", chapter.name(), duration);

        Ok(ChapterResult {
            chapter_name: chapter.name().to_string(),
            duration,
        })
    }

    /// 依加入順序執行所有章節
    pub async fn execute_all(&self, api: &BillingClient) -> Result<Vec<ChapterResult>> {
        let mut results = Vec::new();

        for chapter in &self.chapters {
            let result = self.execute(api, chapter.name()).await?;
            results.push(result);
        }

        Ok(results)
    }

    /// 執行摘要
    pub fn get_execution_summary(results: &[ChapterResult]) -> HashMap<String, serde_json::Value> {
        let mut summary = HashMap::new();

        let total_duration: std::time::Duration = results.iter().map(|r| r.duration).sum();
        summary.insert(
            "total_chapters".to_string(),
            serde_json::Value::Number(results.len().into()),
        );
        summary.insert(
            "total_duration_ms".to_string(),
            serde_json::Value::Number((total_duration.as_millis() as u64).into()),
        );

        let chapter_names: Vec<serde_json::Value> = results
            .iter()
            .map(|r| serde_json::Value::String(r.chapter_name.clone()))
            .collect();
        summary.insert(
            "executed_chapters".to_string(),
            serde_json::Value::Array(chapter_names),
        );

        summary
    }
}

impl Default for ChapterSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopChapter {
        name: String,
    }

    #[async_trait]
    impl Chapter for NoopChapter {
        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            "does nothing"
        }

        async fn run(&self, _api: &BillingClient) -> Result<()> {
            Ok(())
        }
    }

    fn local_client() -> BillingClient {
        let config =
            crate::config::ApiConfig::from_toml_str("[api]\nendpoint = \"http://localhost:1\"\n")
                .unwrap();
        BillingClient::new(&config)
    }

    #[tokio::test]
    async fn test_execute_all_runs_chapters_in_order() {
        let mut sequence = ChapterSequence::new();
        sequence.add_chapter(Box::new(NoopChapter {
            name: "first".to_string(),
        }));
        sequence.add_chapter(Box::new(NoopChapter {
            name: "second".to_string(),
        }));

        let results = sequence.execute_all(&local_client()).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].chapter_name, "first");
        assert_eq!(results[1].chapter_name, "second");
    }

    #[tokio::test]
    async fn test_unknown_chapter_is_an_error() {
        let sequence = ChapterSequence::new();
        let err = sequence.execute(&local_client(), "missing").await.unwrap_err();
        assert!(matches!(err, BillingError::ProcessingError { .. }));
    }

    #[test]
    fn test_execution_summary() {
        let results = vec![
            ChapterResult {
                chapter_name: "accounts".to_string(),
                duration: std::time::Duration::from_millis(100),
            },
            ChapterResult {
                chapter_name: "orders".to_string(),
                duration: std::time::Duration::from_millis(200),
            },
        ];

        let summary = ChapterSequence::get_execution_summary(&results);

        assert_eq!(
            summary.get("total_chapters").unwrap(),
            &serde_json::Value::Number(2.into())
        );
        assert_eq!(
            summary.get("total_duration_ms").unwrap(),
            &serde_json::Value::Number(300.into())
        );
    }
}
