//! Basic usage example for path-utils
//!
//! Run with `RUST_LOG=info` to see the diagnostic messages.

use path_utils::{
    Diagnostics, JsonFile, JsonOptions, PathCreator, TextFile, TextOptions, TracingSink, read_directory,
};
use serde_json::json;
use std::sync::Arc;

const JSON_FILE_PATH: &str = "output/data.json";
const TEXT_FILE_PATH: &str = "output/data.txt";

fn create_path_example(sink: Arc<TracingSink>) {
    println!("\n--- PathCreator Example ---");

    let creator = PathCreator::with_diagnostics(Diagnostics::default().with_sink(sink));

    creator.make_dir("output/nested/folders");
    creator.make_file("output/hello.txt", "Hello, World!");
    creator.make_file(
        "output/config.json",
        &json!({
            "name": "path-utils",
            "version": env!("CARGO_PKG_VERSION"),
            "features": ["PathCreator", "JsonFile", "TextFile", "read_directory"],
        }),
    );
}

async fn json_file_example(sink: Arc<TracingSink>) {
    println!("\n--- JsonFile Example ---");

    let options = JsonOptions::default()
        .with_initial_value(json!({ "items": [] }))
        .with_sink(sink);
    let file = JsonFile::with_options(JSON_FILE_PATH, options);

    let Some(mut data) = file.read().await else {
        println!("Could not read {JSON_FILE_PATH}");
        return;
    };
    println!("Initial data: {data}");

    if let Some(items) = data["items"].as_array_mut() {
        items.push(json!({ "id": 1, "name": "Item 1" }));
        items.push(json!({ "id": 2, "name": "Item 2" }));
    }
    file.write(&data);

    println!("Updated data: {:?}", file.read().await);
}

async fn text_file_example(sink: Arc<TracingSink>) {
    println!("\n--- TextFile Example ---");

    let file = TextFile::with_options(TEXT_FILE_PATH, TextOptions::default().with_sink(sink));

    file.write("1. First Line");
    file.push("2. Appended without new line", false).await;
    file.push("3. Appended with new line", true).await;
    file.unshift("0. Prepended without new line", false).await;
    file.unshift("-1. Prepended with new line", true).await;

    println!("Final content:\n{}", file.read().await.unwrap_or_default());
}

async fn read_directory_example() {
    println!("\n--- read_directory Example ---");

    let listing = read_directory("output", &["nested"]).await;
    println!("Entries in output: {listing:?}");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = path_utils::logging::init() {
        eprintln!("logging disabled: {e}");
    }
    let sink = Arc::new(TracingSink);

    create_path_example(sink.clone());
    json_file_example(sink.clone()).await;
    text_file_example(sink).await;
    read_directory_example().await;

    println!("\nAll examples completed");
}
