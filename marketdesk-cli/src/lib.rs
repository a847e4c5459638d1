//! Command-line front end for the MarketDesk list engine.
//!
//! Reads a JSON array exported from one of the commerce API's list
//! endpoints, applies search, filters, sort and paging exactly as the
//! dashboard does, and prints the resulting page as JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use marketdesk_listview::{
    Choice, FilterCriteria, ListConfig, ListQuery, ListState, ListView, NumericRange, SortKey,
};
use marketdesk_model::{
    decode_list, decode_list_lenient, Category, Product, RecentOrder, Subcategory, TypedRecord,
    User,
};
use marketdesk_session::Session;
use marketdesk_types::Timestamp;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "marketdesk")]
#[command(about = "Filter, sort and page a MarketDesk list export")]
pub struct Cli {
    /// JSON file holding the list payload (a JSON array)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Kind of record in the payload
    #[arg(short, long, value_enum, default_value_t = EntityKind::Product)]
    pub entity: EntityKind,

    /// Case-insensitive text matched against the searchable fields
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact-match filter, `field=value` (repeatable; `field=all` is no-op)
    #[arg(long = "choice", value_parser = parse_choice)]
    pub choices: Vec<(String, Choice)>,

    /// Inclusive numeric filter, `field=min..max` with either end optional
    #[arg(long = "range", value_parser = parse_range)]
    pub ranges: Vec<(String, NumericRange)>,

    /// Sort key, `field`, `field:asc` or `field:desc`
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// 1-indexed page to print
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Records per page (one of the configured tiers)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Path to a list config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Login token; restricts products to the session's vendor
    #[arg(long)]
    pub token: Option<String>,

    /// Skip malformed records instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Record types the CLI can list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    #[default]
    Product,
    Category,
    Subcategory,
    User,
    Order,
}

/// One list invocation, independent of where its arguments came from.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub entity: EntityKind,
    pub filter: FilterCriteria,
    pub sort: Option<SortKey>,
    pub page: usize,
    pub page_size: Option<usize>,
    pub token: Option<String>,
    pub lenient: bool,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            entity: EntityKind::default(),
            filter: FilterCriteria::default(),
            sort: None,
            page: 1,
            page_size: None,
            token: None,
            lenient: false,
        }
    }
}

impl Cli {
    pub fn request(&self) -> ListRequest {
        let mut filter = FilterCriteria::new().with_search(self.search.clone());
        for (field, choice) in &self.choices {
            filter = filter.with_choice(field, choice.clone());
        }
        for (field, range) in &self.ranges {
            filter = filter.with_range(field, *range);
        }

        ListRequest {
            entity: self.entity,
            filter,
            sort: self.sort.clone(),
            page: self.page,
            page_size: self.page_size,
            token: self.token.clone(),
            lenient: self.lenient,
        }
    }

    pub fn load_config(&self) -> ListConfig {
        match &self.config {
            Some(path) => ListConfig::load_from(path),
            None => ListConfig::default(),
        }
    }
}

/// Parses `field=value`.
pub fn parse_choice(s: &str) -> std::result::Result<(String, Choice), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got {s:?}"))?;
    if field.trim().is_empty() {
        return Err("empty field name".to_string());
    }
    Ok((field.trim().to_string(), Choice::from(value)))
}

/// Parses `field=min..max`, `field=min..` or `field=..max`.
pub fn parse_range(s: &str) -> std::result::Result<(String, NumericRange), String> {
    let (field, bounds) = s
        .split_once('=')
        .ok_or_else(|| format!("expected field=min..max, got {s:?}"))?;
    if field.trim().is_empty() {
        return Err("empty field name".to_string());
    }
    let (min, max) = bounds
        .split_once("..")
        .ok_or_else(|| format!("expected min..max, got {bounds:?}"))?;

    let bound = |raw: &str| -> std::result::Result<Option<f64>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(format!("invalid bound {raw:?}")),
        }
    };

    Ok((
        field.trim().to_string(),
        NumericRange {
            min: bound(min)?,
            max: bound(max)?,
        },
    ))
}

/// Builds the query for `request` on a fresh list state.
pub fn build_query(request: &ListRequest, config: ListConfig) -> Result<ListQuery> {
    let mut state = ListState::new(config).context("Invalid list config")?;
    if let Some(size) = request.page_size {
        state.set_page_size(size)?;
    }
    if let Some(sort) = &request.sort {
        state.set_sort(sort.clone());
    }
    state.set_filter(request.filter.clone());
    state.set_page(request.page)?;
    Ok(state.query())
}

/// Runs one list request over `payload` and returns the page as JSON.
pub fn run(payload: Value, request: &ListRequest, config: ListConfig) -> Result<Value> {
    let query = build_query(request, config)?;
    debug!("Listing {:?} with sort {}", request.entity, query.sort);

    match request.entity {
        EntityKind::Product => {
            let mut products: Vec<Product> = decode(payload, request.lenient)?;
            if let Some(token) = &request.token {
                let session = Session::from_token(token).context("Invalid token")?;
                if session.is_expired(Timestamp::now()) {
                    bail!("Session for {} has expired", session.user().email);
                }
                let scope = session.product_scope()?;
                let before = products.len();
                products.retain(|p| scope.permits(p.vendor_id));
                info!(
                    "Scoped to {} ({} of {} products)",
                    scope.api_path(),
                    products.len(),
                    before
                );
            }
            page_of(&products, &query)
        }
        EntityKind::Category => page_of(&decode::<Category>(payload, request.lenient)?, &query),
        EntityKind::Subcategory => {
            page_of(&decode::<Subcategory>(payload, request.lenient)?, &query)
        }
        EntityKind::User => page_of(&decode::<User>(payload, request.lenient)?, &query),
        EntityKind::Order => page_of(&decode::<RecentOrder>(payload, request.lenient)?, &query),
    }
}

fn decode<T: DeserializeOwned>(payload: Value, lenient: bool) -> Result<Vec<T>> {
    if !lenient {
        return decode_list(payload).context("Malformed payload (use --lenient to skip bad records)");
    }
    let decoded = decode_list_lenient(payload)?;
    if !decoded.rejected.is_empty() {
        warn!("Skipped {} malformed records", decoded.rejected.len());
    }
    Ok(decoded.records)
}

fn page_of<R: TypedRecord + Serialize>(records: &[R], query: &ListQuery) -> Result<Value> {
    let page = ListView::of::<R>().run(records, query);
    Ok(serde_json::to_value(&page)?)
}
