//! JSON fixtures shaped like the real API's payloads.

#![allow(dead_code)]

use rickmorty::Client;
use serde_json::{json, Value};
use wiremock::MockServer;

pub fn client(server: &MockServer) -> Client {
    Client::builder()
        .base_url(format!("{}/api", server.uri()))
        .unwrap()
        .build()
        .unwrap()
}

pub fn character(id: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Character {}", id),
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
        "location": {"name": "Earth (Replacement Dimension)", "url": "https://rickandmortyapi.com/api/location/20"},
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        "episode": ["https://rickandmortyapi.com/api/episode/1"],
        "url": format!("https://rickandmortyapi.com/api/character/{}", id),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub fn episode(id: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Episode {}", id),
        "air_date": "December 2, 2013",
        "episode": format!("S01E{:02}", id),
        "characters": ["https://rickandmortyapi.com/api/character/1"],
        "url": format!("https://rickandmortyapi.com/api/episode/{}", id),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

pub fn location(id: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Location {}", id),
        "type": "Planet",
        "dimension": "Dimension C-137",
        "residents": [],
        "url": format!("https://rickandmortyapi.com/api/location/{}", id),
        "created": "2017-11-10T12:42:04.162Z"
    })
}

/// A collection envelope for `page` of `pages` holding `results`.
pub fn page(resource: &str, results: Vec<Value>, page: u32, pages: u32, count: u32) -> Value {
    let link = |n: u32| format!("https://rickandmortyapi.com/api/{}/?page={}", resource, n);
    let next = (page < pages).then(|| link(page + 1));
    let prev = (page > 1).then(|| link(page - 1));
    json!({
        "info": {
            "count": count,
            "pages": pages,
            "next": next,
            "prev": prev,
        },
        "results": results,
    })
}

pub fn ids<T: rickmorty::Entity>(items: &[T]) -> Vec<u32> {
    items.iter().map(|item| item.id()).collect()
}
