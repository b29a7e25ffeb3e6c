use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Area, AreaId, AreaView, EdgeView, GraphExport, GraphSummary, Listing, ListingId, ListingView,
};

/// Contract violations on graph mutation
///
/// These are programming errors, not data defects: the assembler only ever
/// wires up entities it just inserted, so hitting one of these means a
/// caller misused the handles.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("area handle {0} is not part of the graph")]
    UnknownArea(usize),

    #[error("listing handle {0} is not part of the graph")]
    UnknownListing(usize),

    #[error("listing {address:?} already has a matched area")]
    DuplicateEdge { address: String },
}

/// A listing-to-area edge with the matching distance attached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub listing: ListingId,
    pub area: AreaId,
    pub distance: f64,
}

/// Owning container for areas, listings, and the listing→area edge set
///
/// The edge set is a star forest: every listing has at most one outgoing
/// edge to its nearest area, and areas carry no edges among themselves.
/// Handles are issued on insertion and are only valid for the graph that
/// issued them.
#[derive(Debug, Default)]
pub struct Graph {
    areas: Vec<Area>,
    listings: Vec<Listing>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an area node, returning its handle
    pub fn add_area(&mut self, area: Area) -> AreaId {
        let id = AreaId(self.areas.len());
        self.areas.push(area);
        id
    }

    /// Insert a listing node, returning its handle
    pub fn add_listing(&mut self, listing: Listing) -> ListingId {
        let id = ListingId(self.listings.len());
        self.listings.push(listing);
        id
    }

    /// Connect a listing to its nearest area
    ///
    /// Both handles must have been issued by this graph and the listing must
    /// not already be connected; violating either is an error, never a
    /// silent no-op. On success the listing's back-reference and the area's
    /// listing collection are both updated.
    pub fn add_edge(
        &mut self,
        listing: ListingId,
        area: AreaId,
        distance: f64,
    ) -> Result<(), GraphError> {
        if area.0 >= self.areas.len() {
            return Err(GraphError::UnknownArea(area.0));
        }
        let Some(listing_node) = self.listings.get_mut(listing.0) else {
            return Err(GraphError::UnknownListing(listing.0));
        };
        if listing_node.area.is_some() {
            return Err(GraphError::DuplicateEdge {
                address: listing_node.address.clone(),
            });
        }

        listing_node.area = Some(area);
        self.areas[area.0].listings.push(listing);
        self.edges.push(Edge {
            listing,
            area,
            distance,
        });
        Ok(())
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(id.0)
    }

    pub fn listing(&self, id: ListingId) -> Option<&Listing> {
        self.listings.get(id.0)
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn listing_count(&self) -> usize {
        self.listings.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Mean price of the listings assigned to an area
    ///
    /// 0.0 when the area has no listings; `None` for an unknown handle.
    pub fn average_price(&self, id: AreaId) -> Option<f64> {
        let area = self.areas.get(id.0)?;
        if area.listings.is_empty() {
            return Some(0.0);
        }
        let total: f64 = area
            .listings
            .iter()
            .filter_map(|listing| self.listings.get(listing.0))
            .map(|listing| listing.price)
            .sum();
        Some(total / area.listings.len() as f64)
    }

    /// Serializable snapshot of the whole graph for downstream rendering
    pub fn export(&self) -> GraphExport {
        let areas = self
            .areas
            .iter()
            .enumerate()
            .map(|(index, area)| AreaView {
                name: area.name.clone(),
                coord: area.coord,
                crime_score: area.crime_score,
                average_price: self.average_price(AreaId(index)).unwrap_or(0.0),
                listing_count: area.listings.len(),
            })
            .collect();

        let listings = self
            .listings
            .iter()
            .map(|listing| ListingView {
                address: listing.address.clone(),
                coord: listing.coord,
                price: listing.price,
                bedrooms: listing.bedrooms,
                bathrooms: listing.bathrooms,
                price_per_bed: listing.price_per_bed().unwrap_or(0.0),
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .map(|edge| EdgeView {
                listing_address: self.listings[edge.listing.0].address.clone(),
                area_name: self.areas[edge.area.0].name.clone(),
                distance: edge.distance,
            })
            .collect();

        GraphExport {
            summary: self.summary(),
            areas,
            listings,
            edges,
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            area_count: self.areas.len(),
            listing_count: self.listings.len(),
            edge_count: self.edges.len(),
            generated_at: chrono::Utc::now(),
        }
    }
}
