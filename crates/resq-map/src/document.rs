//! Map document builder and HTML rendering.
//!
//! The document accumulates markers and at most one polyline, then renders
//! a single HTML file pulling Leaflet 1.9.4 from its CDN.  Marker and
//! polyline data are embedded as one JSON literal, so labels can contain
//! anything JSON can carry without breaking the page.

use std::path::Path;

use serde::Serialize;

use resq_core::Coordinate;

use crate::MapResult;

// ── Styles ────────────────────────────────────────────────────────────────────

/// Marker appearance: pin color and the glyph shown inside it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub symbol: &'static str,
}

impl MarkerStyle {
    /// Blue pin with a plus glyph — facility locations.
    pub fn facility() -> Self {
        Self { color: "#2a81cb", symbol: "+" }
    }

    /// Red pin — the actor's current position.
    pub fn actor() -> Self {
        Self { color: "#cb2b3e", symbol: "●" }
    }
}

/// Polyline appearance.  The two presets keep provider-drawn and
/// straight-line routes visually distinct.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
}

impl RouteStyle {
    /// Road-following route from the provider.
    pub fn provider() -> Self {
        Self { color: "red", weight: 5, opacity: 0.8 }
    }

    /// Straight-line fallback.
    pub fn straight_line() -> Self {
        Self { color: "orange", weight: 2, opacity: 0.8 }
    }
}

// ── Embedded data model ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct MarkerData {
    lat: f64,
    lon: f64,
    label: String,
    #[serde(flatten)]
    style: MarkerStyle,
}

#[derive(Serialize)]
struct RouteData {
    coords: Vec<[f64; 2]>,
    #[serde(flatten)]
    style: RouteStyle,
}

#[derive(Serialize)]
struct MapData {
    center: [f64; 2],
    zoom: u8,
    markers: Vec<MarkerData>,
    route: Option<RouteData>,
}

// ── MapDocument ───────────────────────────────────────────────────────────────

/// Accumulates map content, renders HTML, and saves the artifact.
pub struct MapDocument {
    data: MapData,
}

impl MapDocument {
    /// Start a document centered on `center` at the given zoom level.
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            data: MapData {
                center: [center.lat, center.lon],
                zoom,
                markers: Vec::new(),
                route: None,
            },
        }
    }

    pub fn add_marker(
        &mut self,
        pos: Coordinate,
        label: impl Into<String>,
        style: MarkerStyle,
    ) -> &mut Self {
        self.data.markers.push(MarkerData {
            lat: pos.lat,
            lon: pos.lon,
            label: label.into(),
            style,
        });
        self
    }

    /// Set the route polyline.  Calling again replaces the previous one —
    /// the document carries at most one route.
    pub fn set_route(&mut self, coords: &[Coordinate], style: RouteStyle) -> &mut Self {
        self.data.route = Some(RouteData {
            coords: coords.iter().map(|c| [c.lat, c.lon]).collect(),
            style,
        });
        self
    }

    /// Render the full HTML document.
    pub fn to_html(&self) -> MapResult<String> {
        // Escape `<` so a literal `</script>` in a label cannot terminate
        // the inline script block.
        let data = serde_json::to_string(&self.data)?.replace('<', "\\u003c");
        let mut html = String::with_capacity(HTML_HEAD.len() + HTML_TAIL.len() + data.len());
        html.push_str(HTML_HEAD);
        html.push_str("const mapData = ");
        html.push_str(&data);
        html.push_str(";");
        html.push_str(HTML_TAIL);
        Ok(html)
    }

    /// Render and write the artifact to `path`.
    pub fn save(&self, path: &Path) -> MapResult<()> {
        std::fs::write(path, self.to_html()?)?;
        Ok(())
    }
}

// ── HTML template ─────────────────────────────────────────────────────────────

const HTML_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Dispatch Route</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css"
    crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js"
    crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  <style>
    html, body { height: 100%; margin: 0; }
    #map { height: 100%; width: 100%; }
    .pin {
      width: 22px;
      height: 22px;
      border-radius: 50%;
      border: 2px solid #ffffff;
      box-shadow: 0 1px 4px rgba(0, 0, 0, 0.4);
      color: #ffffff;
      font: bold 14px/18px sans-serif;
      text-align: center;
    }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
"#;

const HTML_TAIL: &str = r#"
    const map = L.map('map').setView(mapData.center, mapData.zoom);
    L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);

    for (const m of mapData.markers) {
      const icon = L.divIcon({
        className: '',
        html: '<div class="pin" style="background:' + m.color + '">' + m.symbol + '</div>',
        iconSize: [22, 22],
        iconAnchor: [11, 11]
      });
      L.marker([m.lat, m.lon], { icon }).bindPopup(m.label).addTo(map);
    }

    if (mapData.route) {
      L.polyline(mapData.route.coords, {
        color: mapData.route.color,
        weight: mapData.route.weight,
        opacity: mapData.route.opacity
      }).addTo(map);
    }
  </script>
</body>
</html>
"#;
