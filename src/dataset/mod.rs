//! Account/story dataset: loading and popularity bookkeeping.

pub mod loader;

pub use loader::{AccountRow, DatasetLoader};

use serde::Serialize;

use crate::graph::LabeledDigraph;

/// A story together with the number of accounts linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedStory {
    /// Story id.
    pub id: String,
    /// Out-degree of the story vertex.
    pub popularity: usize,
}

/// Most and least popular stories of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryPopularity {
    pub most_popular: RankedStory,
    pub least_popular: RankedStory,
}

/// A loaded dataset: the account/story graph plus running totals.
///
/// Accounts and stories share one label namespace in the graph.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(crate) graph: LabeledDigraph<String>,
    pub(crate) users: Vec<String>,
    pub(crate) stories: Vec<String>,
    pub(crate) total_users: usize,
    pub(crate) total_tweets: u64,
}

impl Dataset {
    pub(crate) fn empty() -> Self {
        Self {
            graph: LabeledDigraph::new(),
            users: Vec::new(),
            stories: Vec::new(),
            total_users: 0,
            total_tweets: 0,
        }
    }

    /// The account/story graph.
    pub fn graph(&self) -> &LabeledDigraph<String> {
        &self.graph
    }

    /// Take ownership of the graph.
    pub fn into_graph(self) -> LabeledDigraph<String> {
        self.graph
    }

    /// Number of data rows read.
    pub fn total_users(&self) -> usize {
        self.total_users
    }

    /// Number of distinct story ids.
    pub fn total_stories(&self) -> usize {
        self.stories.len()
    }

    /// Sum of tweet counts over all rows.
    pub fn total_tweets(&self) -> u64 {
        self.total_tweets
    }

    /// Distinct story ids in first-seen order.
    pub fn stories(&self) -> &[String] {
        &self.stories
    }

    /// Account screen names in row order (one entry per row).
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Most and least popular stories, first in story order on ties.
    pub fn popularity(&self) -> Option<StoryPopularity> {
        let mut ranked = self.stories.iter().map(|id| RankedStory {
            id: id.clone(),
            popularity: self.degree(id),
        });
        let first = ranked.next()?;
        let mut most = first.clone();
        let mut least = first;
        for story in ranked {
            if story.popularity > most.popularity {
                most = story.clone();
            }
            if story.popularity < least.popularity {
                least = story;
            }
        }
        Some(StoryPopularity {
            most_popular: most,
            least_popular: least,
        })
    }

    /// The account linked to the most stories, first in row order on ties.
    pub fn most_active_user(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for user in &self.users {
            let degree = self.degree(user);
            if best.map_or(true, |(_, d)| degree > d) {
                best = Some((user.as_str(), degree));
            }
        }
        best.map(|(user, _)| user)
    }

    fn degree(&self, vertex: &String) -> usize {
        self.graph.out_degree(vertex).unwrap_or(0)
    }
}
