use std::{
    io::Cursor,
    net::{SocketAddr, TcpListener},
    sync::Arc,
};

use axum::Router;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

use crate::{app::env::Envy, store::models::store::Store, AppState};

/// Serves `router` on an ephemeral local port.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router.into_make_service())
            .await
            .unwrap();
    });

    addr
}

pub fn state(envy: Envy) -> AppState {
    let client = reqwest::Client::builder()
        .timeout(envy.request_timeout())
        .build()
        .unwrap();

    AppState {
        envy: Arc::new(envy),
        client,
        store: Arc::new(Store::default()),
    }
}

pub fn encode(width: u32, height: u32, format: ImageOutputFormat) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut cursor, format)
        .unwrap();

    cursor.into_inner()
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageOutputFormat::Jpeg(90))
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageOutputFormat::Png)
}
