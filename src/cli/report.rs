//! Investigation report — what the `investigate` command prints.

use std::fmt::Write as _;

use serde::Serialize;

use crate::dataset::{Dataset, RankedStory};
use crate::graph::{component_stats, ComponentStats};
use crate::title::TitleResolver;

/// A ranked story with its resolved title, if lookup succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryEntry {
    pub id: String,
    pub popularity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Everything the investigation reports about a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestigationReport {
    pub total_users: usize,
    pub total_stories: usize,
    pub total_tweets: u64,
    pub most_active_user: Option<String>,
    pub most_popular_story: Option<StoryEntry>,
    pub least_popular_story: Option<StoryEntry>,
    pub components: ComponentStats,
}

impl InvestigationReport {
    /// Build the report. Titles are looked up only when a resolver is given;
    /// a failed lookup is logged and leaves the title empty.
    pub fn build(dataset: &Dataset, titles: Option<&dyn TitleResolver>) -> Self {
        let popularity = dataset.popularity();
        let entry = |story: &RankedStory| StoryEntry {
            id: story.id.clone(),
            popularity: story.popularity,
            title: titles.and_then(|r| match r.resolve_title(&story.id) {
                Ok(title) => Some(title),
                Err(e) => {
                    log::warn!("Title lookup for story {} failed: {}", story.id, e);
                    None
                }
            }),
        };

        Self {
            total_users: dataset.total_users(),
            total_stories: dataset.total_stories(),
            total_tweets: dataset.total_tweets(),
            most_active_user: dataset.most_active_user().map(str::to_string),
            most_popular_story: popularity.as_ref().map(|p| entry(&p.most_popular)),
            least_popular_story: popularity.as_ref().map(|p| entry(&p.least_popular)),
            components: component_stats(dataset.graph()),
        }
    }

    /// Render as human-readable lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total users: {}", self.total_users);
        let _ = writeln!(out, "Total stories: {}", self.total_stories);
        let _ = writeln!(out, "Total tweets: {}", self.total_tweets);
        let _ = writeln!(
            out,
            "Most active user: {}",
            self.most_active_user.as_deref().unwrap_or("-")
        );
        let _ = writeln!(
            out,
            "Most popular story: {}",
            story_line(self.most_popular_story.as_ref())
        );
        let _ = writeln!(
            out,
            "Least popular story: {}",
            story_line(self.least_popular_story.as_ref())
        );
        let _ = writeln!(out, "Largest component: {}", self.components.largest_component);
        let _ = writeln!(
            out,
            "Smallest component: {}",
            self.components.smallest_component
        );
        let _ = writeln!(out, "Total vertices: {}", self.components.vertex_count);
        let _ = writeln!(out, "Fully connected: {}", self.components.connected);
        out
    }
}

fn story_line(story: Option<&StoryEntry>) -> String {
    match story {
        None => "-".to_string(),
        Some(s) => match &s.title {
            Some(title) => format!("{} ({} accounts) {}", s.id, s.popularity, title),
            None => format!("{} ({} accounts)", s.id, s.popularity),
        },
    }
}
