//! Line feed: marshals text lines from a reader thread onto the UI thread.

mod feed;

pub use feed::LineFeed;
