//! Browser-independent interaction logic for a static portfolio site.
//!
//! The two structured pieces are a full-text search engine over a static JSON
//! corpus and a post filter/search panel. Around them sit the small
//! controllers a page needs: the light/dark theme switch, a reading-progress
//! bar, and scroll-triggered reveal animations.
//!
//! Nothing here touches the DOM or reads a clock. Hosts feed events in (with a
//! [`Timestamp`] where timing matters) and paint what comes back. The `wasm`
//! feature wires the controllers up to page scripts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  corpus.rs  │────▶│   index/     │────▶│   search/   │────▶│  render.rs  │
//! │ (JSON, HTTP │     │ (build_index,│     │ (search,    │     │ (highlight, │
//! │  status)    │     │  vocabulary) │     │  SearchBox) │     │  SearchView)│
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                 │
//!                                                 ▼
//!                                          ┌─────────────┐
//!                                          │  scoring/   │
//!                                          │  fuzzy/     │
//!                                          └─────────────┘
//!
//! ┌─────────────┐     ┌──────────────┐
//! │   panel/    │────▶│   timer.rs   │◀──── progress.rs
//! │ (FilterPanel│     │ (Debouncer,  │
//! │  PanelView) │     │  Throttle)   │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use folio::{SearchBox, SearchView};
//!
//! let mut search_box = SearchBox::default();
//! let corpus = r#"[{"title": "Kubernetes Security", "excerpt": "hardening clusters",
//!                   "content": "", "url": "/k8s/", "date": "2024-03-01"}]"#;
//! search_box.load_response(200, corpus);
//!
//! match search_box.input("kubernet") {
//!     SearchView::Results(page) => {
//!         assert_eq!(page.total, 1);
//!         assert_eq!(page.hits[0].title_html, "<mark>Kubernet</mark>es Security");
//!     }
//!     other => panic!("unexpected view: {:?}", other),
//! }
//! ```

pub mod animate;
pub mod config;
pub mod corpus;
mod error;
pub mod fuzzy;
mod index;
pub mod panel;
pub mod progress;
pub mod render;
pub mod scoring;
pub mod search;
pub mod theme;
pub mod timer;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

pub use animate::{skill_width, CounterAnimation, RevealSet};
pub use config::{FieldWeights, PanelConfig, SearchConfig, SiteConfig};
pub use corpus::{corpus_from_response, load_corpus_file, parse_corpus};
pub use error::{Error, Result};
pub use fuzzy::{levenshtein_distance_within, levenshtein_within};
pub use index::{build_index, FragmentMatch, SearchIndex};
pub use panel::{item_visible, FilterItem, FilterPanel, NullView, PanelView};
pub use progress::{reading_progress, ArticleGeometry, ProgressTracker};
pub use render::{escape_html, highlight, RenderedHit, ResultPage, SearchView};
pub use search::{search, IndexState, SearchBox, MAX_QUERY_TERMS};
pub use theme::{PreferenceStore, Theme, ThemeSwitch, STORAGE_KEY};
pub use timer::{Debouncer, Throttle, Timestamp};
pub use types::{
    DocId, Document, FieldType, MatchKind, Posting, PostingList, RawDocument, SearchHit,
    VocabSuffixEntry,
};
pub use utils::{normalize, tokenize};
