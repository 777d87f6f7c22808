//! Tabbed content switching.
//!
//! Markup contract (names configurable through [`TabsConfig`]):
//!
//! ```html
//! <div class="tabpanel">
//!   <ul class="tab_titles">
//!     <li><button role="tab" aria-controls="intro">Intro</button></li>
//!     <li><button role="tab" aria-controls="usage" class="active-tab-control">Usage</button></li>
//!   </ul>
//!   <div id="intro">...</div>
//!   <div id="usage">...</div>
//! </div>
//! ```
//!
//! The visible panel gets `active-tab-panel`, its control `active-tab-control`.
//! Hiding panels without that class is left to page CSS.

pub mod error;
pub mod group;
pub mod scanner;
pub mod tab;

pub use error::TabsError;
pub use group::{TabGroup, TabGroupHandle};
pub use scanner::{scan, scan_within, ScanReport};
pub use tab::Tab;
