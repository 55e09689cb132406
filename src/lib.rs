// Library root
// -----------
// The binary (`main.rs`) wires these modules together into the interactive
// share tracker.
//
// Module responsibilities:
// - `config`: runtime settings (API endpoint, token, file paths).
// - `api`: blocking HTTP client for the graph API's shared-posts edge.
// - `normalize`: nested API response -> flat `ShareRecord`s.
// - `store`: JSON snapshot on disk, always replaced wholesale.
// - `export`: CSV projection of the snapshot.
// - `present`: share table and status notices.
// - `ui`: the menu state machine driving everything above.
pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod present;
pub mod store;
pub mod ui;
