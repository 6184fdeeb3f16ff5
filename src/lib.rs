#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Jadlog Tracking
//!
//! > **Carrier tracking codes for store orders.**
//!
//! Attaches a Jadlog tracking code to an order, emails the customer the first
//! time one is set, and shows the code in the order-admin screen and on the
//! customer's order page.
//!
//! ## 🏗️ How It Fits Together
//!
//! ```text
//! metabox ──POST /admin/ajax──▶ TrackingManager ──▶ OrderStore (order actor)
//!                                     │
//!                                     └─ Added ──▶ EmailDispatcher ──▶ Mailer
//! ```
//!
//! The host owns orders. This crate models the host's order storage as a
//! single-owner actor and only ever touches two things on an order: the
//! `_jadlog_tracking_code` metadata key and the note log.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`tracking`])
//! - **Role**: reads and writes the code, records one note per write and
//!   decides when the customer is emailed.
//! - **Key items**: [`TrackingManager`](tracking::TrackingManager),
//!   [`Transition`](tracking::Transition), [`OrderStore`](tracking::OrderStore).
//!
//! ### 2. The Order Store ([`framework`], [`order_actor`], [`clients`], [`model`])
//! - **Role**: a generic `ResourceActor<T>` owning every [`Order`](model::Order),
//!   fronted by the typed [`OrderClient`](clients::OrderClient).
//!
//! ### 3. Notification ([`email`], [`hooks`])
//! - **Role**: renders the "order sent" email with placeholder substitution and
//!   the two filters deployments may hook into.
//!
//! ### 4. Surfaces ([`admin`], [`storefront`], [`server`], [`templates`])
//! - **Role**: the admin metabox and its AJAX endpoint (nonce-guarded), the
//!   customer tracking section, and the axum router serving them.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: loads configuration, wires everything and shuts it down.
//! - **Key items**: [`TrackingSystem`](lifecycle::TrackingSystem).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --demo
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for utilities to test clients without spawning full
//! actors, and [`email::OutboxMailer`] to inspect sent emails.

pub mod admin;
pub mod clients;
pub mod config;
pub mod email;
pub mod framework;
pub mod hooks;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod server;
pub mod storefront;
pub mod templates;
pub mod tracking;
