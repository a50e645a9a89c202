//! Ingestion pipeline — account/story rows into a LabeledDigraph.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::graph::LabeledDigraph;
use crate::types::{GraphError, GraphResult, DEFAULT_DELIMITER, DEFAULT_STORY_SEPARATOR};

use super::Dataset;

/// Number of fields a row must carry.
const FIELD_COUNT: usize = 5;

/// One parsed dataset row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    /// Account screen name (vertex label).
    pub screen_name: String,
    /// Platform user id.
    pub user_id: String,
    /// Number of tweets by this account.
    pub tweet_count: u64,
    /// Declared number of stories, as written in the file.
    pub story_count: String,
    /// Story ids this account took part in.
    pub stories: Vec<String>,
}

/// Reads the account/story table and builds a [`Dataset`].
///
/// The first line is a header and is skipped. Every following non-blank line
/// is `screen_name, user_id, tweet_count, story_count, stories`, separated by
/// the delimiter; `stories` is a list of ids separated by the story separator.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    delimiter: char,
    story_separator: char,
}

impl DatasetLoader {
    /// Create a loader with the default tab delimiter and comma story separator.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            story_separator: DEFAULT_STORY_SEPARATOR,
        }
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the separator between story ids.
    pub fn story_separator(mut self, separator: char) -> Self {
        self.story_separator = separator;
        self
    }

    /// Load a dataset from a file.
    pub fn load_file(&self, path: &Path) -> GraphResult<Dataset> {
        let file = std::fs::File::open(path)?;
        let dataset = self.load(std::io::BufReader::new(file))?;
        log::info!(
            "Loaded {} users, {} stories, {} tweets from {}",
            dataset.total_users(),
            dataset.total_stories(),
            dataset.total_tweets(),
            path.display()
        );
        Ok(dataset)
    }

    /// Load a dataset from any buffered reader.
    pub fn load(&self, reader: impl BufRead) -> GraphResult<Dataset> {
        let mut dataset = Dataset::empty();
        let mut seen_stories: HashSet<String> = HashSet::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line_no == 1 || line.trim().is_empty() {
                continue;
            }
            let row = self.parse_row(&line, line_no)?;
            log::debug!(
                "line {}: {} with {} stories",
                line_no,
                row.screen_name,
                row.stories.len()
            );
            ingest_row(&mut dataset, &mut seen_stories, row);
        }

        Ok(dataset)
    }

    /// Parse a single data line. `line_no` is 1-based and used for errors.
    pub fn parse_row(&self, line: &str, line_no: usize) -> GraphResult<AccountRow> {
        let fields: Vec<&str> = line.split(self.delimiter).collect();
        if fields.len() < FIELD_COUNT {
            return Err(GraphError::Parse {
                line: line_no,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
        }

        let tweet_count = fields[2].trim().parse::<u64>().map_err(|e| GraphError::Parse {
            line: line_no,
            reason: format!("invalid tweet count {:?}: {}", fields[2], e),
        })?;

        let mut stories = Vec::new();
        for story in fields[4].split(self.story_separator) {
            let story = story.trim();
            if story.is_empty() {
                log::warn!("line {}: skipping empty story id", line_no);
                continue;
            }
            stories.push(story.to_string());
        }

        Ok(AccountRow {
            screen_name: fields[0].trim().to_string(),
            user_id: fields[1].trim().to_string(),
            tweet_count,
            story_count: fields[3].to_string(),
            stories,
        })
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn ingest_row(dataset: &mut Dataset, seen_stories: &mut HashSet<String>, row: AccountRow) {
    let graph: &mut LabeledDigraph<String> = &mut dataset.graph;

    graph.add_vertex(row.screen_name.clone());
    dataset.total_tweets += row.tweet_count;
    dataset.total_users += 1;
    dataset.users.push(row.screen_name.clone());

    for story in row.stories {
        if seen_stories.insert(story.clone()) {
            graph.add_vertex(story.clone());
            dataset.stories.push(story.clone());
        }
        graph.add_edge(&row.screen_name, &story);
    }
}
