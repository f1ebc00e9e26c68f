use crate::core::slug::{resolve_image, AssetKind, ImageRef};
use crate::domain::model::{Profile, Socials};
use crate::domain::ports::AssetStore;
use serde::Serialize;

const DANCE: &str = "Dance";
const LISTENING_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaItem {
    pub title: String,
    pub subtitle: Option<String>,
    pub url: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct DanceView {
    pub styles: Vec<String>,
    pub awards: Vec<String>,
    pub organizations: Vec<MediaItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub name: String,
    pub location: String,
    pub links: Vec<SocialLink>,
    pub books: Vec<MediaItem>,
    pub dance: Option<DanceView>,
    pub other_interests: Vec<String>,
    pub songs: Vec<MediaItem>,
}

fn social_links(profile: &Profile) -> Vec<SocialLink> {
    let Socials {
        github,
        spotify,
        instagram,
        scholar,
    } = &profile.socials;

    let candidates = [
        ("LinkedIn", profile.contact.linkedin.clone()),
        ("GitHub", github.clone()),
        ("Google Scholar", scholar.clone()),
        ("Email", Some(format!("mailto:{}", profile.contact.email))),
        ("Instagram", instagram.clone()),
        ("Spotify", spotify.clone()),
    ];

    candidates
        .into_iter()
        .filter_map(|(label, href)| href.map(|href| SocialLink { label, href }))
        .collect()
}

pub async fn build<S: AssetStore>(profile: &Profile, store: &S) -> AboutPage {
    let mut books = Vec::with_capacity(profile.books.len());
    for book in &profile.books {
        books.push(MediaItem {
            title: book.title.clone(),
            subtitle: None,
            url: book.url.clone(),
            image: resolve_image(store, AssetKind::Book, &book.title).await,
        });
    }

    let mut songs = Vec::with_capacity(LISTENING_LIMIT);
    for song in profile.songs.iter().take(LISTENING_LIMIT) {
        songs.push(MediaItem {
            title: song.title.clone(),
            subtitle: Some(format!("{} · {}", song.artist, song.album)),
            url: song.url.clone(),
            image: resolve_image(store, AssetKind::Song, &song.title).await,
        });
    }

    let mut dance = None;
    if let Some(details) = profile.interest(DANCE).and_then(|i| i.details.as_ref()) {
        let mut organizations = Vec::with_capacity(details.organizations.len());
        for org in &details.organizations {
            organizations.push(MediaItem {
                title: org.name.clone(),
                subtitle: None,
                url: org.url.clone(),
                image: resolve_image(store, AssetKind::Organization, &org.name).await,
            });
        }
        dance = Some(DanceView {
            styles: details.styles.clone(),
            awards: details.awards.clone(),
            organizations,
        });
    }

    let other_interests = profile
        .interests
        .iter()
        .filter(|i| i.name != DANCE)
        .map(|i| i.name.clone())
        .collect();

    AboutPage {
        name: profile.name.clone(),
        location: profile.location.clone(),
        links: social_links(profile),
        books,
        dance,
        other_interests,
        songs,
    }
}
