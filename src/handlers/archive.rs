use std::sync::Arc;

use crate::config::Config;
use crate::http::{Completed, Query, ResponseSink};
use crate::stream::gzip_file;

pub const CREATED: &str = "Zip file created successfully";
pub const FAILED: &str = "Failed to create zip file";

/// Compresses the configured input file into the configured output file.
///
/// Query parameters are ignored; both paths come from configuration only.
pub async fn handle(config: Arc<Config>, _query: Query, sink: ResponseSink) -> Completed {
    let input = config.zip_input_path();
    let output = config.zip_output_path();

    match gzip_file(input.clone(), output.clone()).await {
        Ok(stats) => {
            tracing::info!(
                input = %input.display(),
                output = %output.display(),
                bytes_in = stats.bytes_in,
                bytes_out = stats.bytes_out,
                "Archive written"
            );
            sink.end(CREATED)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error creating zip file");
            sink.end(FAILED)
        }
    }
}
