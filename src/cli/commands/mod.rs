pub mod connection;
pub mod docs;
pub mod query;
pub mod raw;

pub use connection::handle_test_connection;
pub use docs::{DocsCommands, handle_docs_command};
pub use query::{QueryCommands, handle_query_command};
pub use raw::{RawCommands, handle_raw_command};
