mod all;
mod footer;
mod log;
mod page;
mod sidebar;
mod table;

use self::log::log;
use super::*;
use footer::footer;
use sidebar::sidebar;

pub use all::all as render;
pub use page::{document_lines, PageStyle};
