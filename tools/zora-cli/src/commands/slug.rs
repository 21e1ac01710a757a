//! `zora slug` - product and vendor slug codec commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;
use std::collections::HashSet;

use crate::output::Output;
use zora_slug::{
    decode_product_slug, encode_product_slug, generate_unique_vendor_slug, product_route,
};

#[derive(Args)]
pub struct SlugArgs {
    #[command(subcommand)]
    command: SlugCommand,
}

#[derive(Subcommand)]
enum SlugCommand {
    /// Encode a canonical UUID as a Base62 product slug
    Encode {
        /// UUID in 8-4-4-4-12 form
        uuid: String,
    },

    /// Decode a Base62 product slug back into a UUID
    Decode {
        /// Base62 slug
        slug: String,
    },

    /// Generate a unique vendor slug from a shop name
    Vendor {
        /// Shop name
        name: String,

        /// Comma-separated slugs that are already taken
        #[arg(long, value_delimiter = ',')]
        taken: Vec<String>,
    },

    /// Show the route a product ID resolves to
    Route {
        /// Product ID (UUID or legacy)
        product_id: String,
    },
}

pub fn run(args: SlugArgs, output: &Output) -> Result<()> {
    match args.command {
        SlugCommand::Encode { uuid } => {
            let slug = encode_product_slug(&uuid)?;
            if output.is_json() {
                output.json(&json!({ "uuid": uuid, "slug": slug }));
            } else {
                output.success(&slug);
            }
        }
        SlugCommand::Decode { slug } => {
            let uuid = decode_product_slug(&slug)?;
            if output.is_json() {
                output.json(&json!({ "slug": slug, "uuid": uuid }));
            } else {
                output.success(&uuid);
            }
        }
        SlugCommand::Vendor { name, taken } => {
            let existing: HashSet<String> = taken.into_iter().collect();
            let slug = generate_unique_vendor_slug(&name, &existing)?;
            if output.is_json() {
                output.json(&json!({ "name": name, "slug": slug }));
            } else {
                output.success(&slug);
            }
        }
        SlugCommand::Route { product_id } => {
            let route = product_route(&product_id);
            if output.is_json() {
                output.json(&json!({ "product_id": product_id, "route": route }));
            } else {
                output.success(&route);
            }
        }
    }
    Ok(())
}
