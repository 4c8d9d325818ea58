//! Best-effort download of class icons
//!
//! Purely decorative: fetched once at startup, one GET per class, all
//! requests issued together. A failed fetch degrades to "no icon for
//! that class" and never propagates.

use std::collections::HashMap;

use futures_util::future::join_all;
use raidledger_domain::CharacterClass;

fn icon_url(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Burglar => "https://lotro-wiki.com/images/1/1e/Framed_Burglar-icon.png",
        CharacterClass::Captain => "https://lotro-wiki.com/images/1/16/Framed_Captain-icon.png",
        CharacterClass::Champion => "https://lotro-wiki.com/images/7/74/Framed_Champion-icon.png",
        CharacterClass::Guardian => "https://lotro-wiki.com/images/d/dc/Framed_Guardian-icon.png",
        CharacterClass::Hunter => "https://lotro-wiki.com/images/7/7c/Framed_Hunter-icon.png",
        CharacterClass::Loremaster => {
            "https://lotro-wiki.com/images/c/c0/Framed_Lore-master-icon.png"
        }
        CharacterClass::Minstrel => "https://lotro-wiki.com/images/f/f6/Framed_Minstrel-icon.png",
    }
}

async fn fetch_one(
    client: &reqwest::Client,
    class: CharacterClass,
) -> Result<Vec<u8>, reqwest::Error> {
    let response = client
        .get(icon_url(class))
        .send()
        .await?
        .error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// Fetch the icon image for every class, skipping failures.
///
/// Classes whose fetch fails are absent from the returned map; the
/// caller renders those entries without an icon.
pub async fn fetch_class_icons() -> HashMap<CharacterClass, Vec<u8>> {
    let client = reqwest::Client::new();
    let fetches = CharacterClass::all().iter().map(|&class| {
        let client = &client;
        async move { (class, fetch_one(client, class).await) }
    });

    let mut icons = HashMap::new();
    for (class, result) in join_all(fetches).await {
        match result {
            Ok(bytes) => {
                icons.insert(class, bytes);
            }
            Err(e) => tracing::warn!(class = %class, "icon fetch failed: {e}"),
        }
    }
    icons
}
