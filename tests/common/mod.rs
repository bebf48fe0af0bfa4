#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use recipe_client::{ClientConfiguration, RecipeClient};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "0714e27e-test-key";

pub struct TestEnvironment {
    pub server: MockServer,
    pub base_url: String,
    pub client: RecipeClient,
}

impl TestEnvironment {
    /// A client pointed at a fresh mock server, with the API rooted at `/api/`.
    pub async fn new() -> Result<Self> {
        let server = MockServer::start().await;
        let base_url = format!("{}/api/", server.uri());

        let config = ClientConfiguration::new(&base_url, TEST_API_KEY)?;
        let client = RecipeClient::new(config)?;

        Ok(Self {
            server,
            base_url,
            client,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A small solid-colour PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let pixels = RgbImage::from_pixel(width, height, Rgb([200, 60, 30]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode test png");
    bytes
}

pub fn search_body() -> serde_json::Value {
    serde_json::json!({
        "count": 2,
        "recipes": [
            {
                "publisher": "Closet Cooking",
                "f2f_url": "http://food2fork.com/view/35382",
                "title": "Jalapeno Popper Grilled Cheese Sandwich",
                "source_url": "http://www.closetcooking.com/2011/04/jalapeno-popper.html",
                "recipe_id": "35382",
                "image_url": "http://static.food2fork.com/JalapenoPopper500fd186186.jpg",
                "social_rank": 100.0,
                "publisher_url": "http://closetcooking.com"
            },
            {
                "publisher": "The Pioneer Woman",
                "f2f_url": "http://food2fork.com/view/47024",
                "title": "Perfect Iced Coffee",
                "source_url": "http://thepioneerwoman.com/cooking/2011/06/perfect-iced-coffee/",
                "recipe_id": "47024",
                "image_url": "http://static.food2fork.com/icedcoffee5766.jpg",
                "social_rank": 99.99,
                "publisher_url": "http://thepioneerwoman.com"
            }
        ]
    })
}
