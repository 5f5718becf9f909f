use anyhow::Result;
use futures_util::StreamExt;
use giphy_rs::{Giphy, Language, Request};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = env::args().nth(1).unwrap_or_else(|| "Milly Rock".to_string());
    let giphy = Giphy::from_env_or_default()?;

    let mut pagination = giphy.search(
        Request::new()
            .query(&query)
            .language(Language::English)
            .max_page_number(4),
    );

    while let Some(page) = pagination.next().await {
        let page_number = page.page_number;
        let giphs = match page.into_result() {
            Ok(giphs) => giphs,
            Err(err) => {
                eprintln!("#{}: {}", page_number, err);
                break;
            }
        };

        println!("Page {}", page_number);
        for giph in giphs {
            println!("\t{} {}", giph.id, giph.title);
            for (size, gif) in &giph.sizes {
                println!("\t\t{}: {}x{} {}", size, gif.width, gif.height, gif.url);
            }
        }
    }

    Ok(())
}
