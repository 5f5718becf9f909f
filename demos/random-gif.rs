use anyhow::Result;
use giphy_rs::{Giphy, Rating, Request};

#[tokio::main]
async fn main() -> Result<()> {
    let giphy = Giphy::from_env_or_default()?;

    let giph = giphy
        .random_gif(Request::new().tag("netflix").rating(Rating::PG))
        .await?;
    println!("Your giph: {} ({})", giph.id, giph.image_url);

    let same = giphy.gif_by_id(&giph.id).await?;
    println!(
        "Retrieved it again, imported at {}",
        same.import_date
            .map_or("unknown".to_string(), |date| date.to_rfc3339())
    );

    Ok(())
}
