//! Page templates.
//!
//! Each page lays out its blocks once and pulls the words from the active
//! locale. The result is a `Document` that the terminal UI, or the plain
//! text printer, turns into lines.

pub mod architecture;
pub mod cloud;
pub mod local;
pub mod overview;

use crate::content::Strings;
use crate::state::Page;
use crate::tables::{TableKind, Tables};
use std::borrow::Cow;

/// One piece of page content.
///
#[derive(Debug, PartialEq, Clone)]
pub enum Block {
    Heading(&'static str),
    Subheader(&'static str),
    Markdown(&'static str),
    Code(&'static str),
    Image {
        file: &'static str,
        caption: &'static str,
    },
    Table {
        kind: TableKind,
        caption: Cow<'static, str>,
    },
    Button {
        label: &'static str,
        target: Page,
    },
    Rule,
}

/// The rendered content of one page.
///
#[derive(Debug, PartialEq, Clone)]
pub struct Document {
    pub page: Page,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Return every button on the page, in order of appearance.
    ///
    pub fn buttons(&self) -> impl Iterator<Item = (&'static str, Page)> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Button { label, target } => Some((*label, *target)),
            _ => None,
        })
    }

    /// Return the tables shown on the page.
    ///
    pub fn tables(&self) -> impl Iterator<Item = TableKind> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table { kind, .. } => Some(*kind),
            _ => None,
        })
    }

    pub fn title(&self) -> Option<&'static str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading(title) => Some(*title),
            _ => None,
        })
    }
}

/// What a page may read while rendering.
///
pub struct RenderContext<'a> {
    pub strings: &'static Strings,
    pub tables: &'a Tables,
}

impl RenderContext<'_> {
    /// Return a table block captioned with its row count.
    ///
    pub fn table_block(&self, kind: TableKind) -> Block {
        Block::Table {
            kind,
            caption: Cow::Owned(format!(
                "{} {}",
                self.tables.row_count(kind),
                self.strings.chrome.rows
            )),
        }
    }
}

/// Defines a page handler the router can dispatch to.
///
pub trait PageView: Send + Sync + 'static {
    fn page(&self) -> Page;
    fn render(&self, ctx: &RenderContext) -> Document;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Locale;
    use crate::tables::fixtures;

    fn all_views() -> [&'static dyn PageView; 4] {
        [
            &overview::PAGE,
            &cloud::PAGE,
            &local::PAGE,
            &architecture::PAGE,
        ]
    }

    #[test]
    fn each_view_renders_its_own_page() {
        let tables = fixtures::tables();
        let ctx = RenderContext {
            strings: Locale::En.strings(),
            tables: &tables,
        };
        for view in all_views() {
            let document = view.render(&ctx);
            assert_eq!(document.page, view.page());
            assert!(document.title().is_some());
        }
    }

    #[test]
    fn buttons_walk_the_tour_in_order() {
        let tables = fixtures::tables();
        for locale in [Locale::En, Locale::Pt] {
            let ctx = RenderContext {
                strings: locale.strings(),
                tables: &tables,
            };
            for view in all_views() {
                let document = view.render(&ctx);
                let targets: Vec<Page> = document.buttons().map(|(_, target)| target).collect();
                let next = Page::ALL[(view.page().index() + 1) % Page::ALL.len()];
                assert_eq!(targets, vec![next]);
            }
        }
    }

    #[test]
    fn only_overview_shows_tables() {
        let tables = fixtures::tables();
        let ctx = RenderContext {
            strings: Locale::En.strings(),
            tables: &tables,
        };
        for view in all_views() {
            let shown: Vec<TableKind> = view.render(&ctx).tables().collect();
            if view.page() == Page::Overview {
                assert_eq!(shown, vec![TableKind::LoginAggregate, TableKind::FirstTimeLogin]);
            } else {
                assert!(shown.is_empty());
            }
        }
    }

    #[test]
    fn table_block_caption_counts_rows() {
        let tables = fixtures::tables();
        let ctx = RenderContext {
            strings: Locale::Pt.strings(),
            tables: &tables,
        };
        match ctx.table_block(TableKind::FirstTimeLogin) {
            Block::Table { caption, .. } => assert_eq!(caption, "1 linhas"),
            other => panic!("unexpected block: {:?}", other),
        }
    }
}
