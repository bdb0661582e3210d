mod csv_feed;

pub(crate) use csv_feed::{CsvFeed, SAMPLE_FEED};
