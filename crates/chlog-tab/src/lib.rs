//! Changelog tab composition.
//!
//! [`ChangelogTab`] chains the markdown converter and the version heading
//! filter: markdown goes in, a [`TabContent`] (HTML plus navigation list)
//! comes out. Results are memoized on the last markdown seen, so re-rendering
//! unchanged input costs one string comparison.
//!
//! # Example
//!
//! ```
//! use chlog_tab::{ChangelogTab, TabConfig};
//!
//! let mut tab = ChangelogTab::new(TabConfig::default())?;
//! let content = tab.render("# Changelog\n\n## 1.0.0\n\nFirst release.");
//!
//! assert_eq!(content.navigation.len(), 1);
//! assert_eq!(content.navigation[0].id.as_deref(), Some("100"));
//! # Ok::<(), chlog_tab::TabError>(())
//! ```

mod memo;
mod page;
mod tab;

pub use memo::Memo;
pub use page::render_page;
pub use tab::{ChangelogTab, TabConfig, TabContent, TabError};
