//! Flag images and map boundaries, loaded off the UI path.
//!
//! Loads are fire-and-forget: a new round drops the receiver and whatever the
//! old load produces is discarded. Every failure becomes a skipped question.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use serde::Deserialize;
use serde_json::Value;

use crate::error::AssetError;
use crate::questions::{Prompt, Question, QuestionKind};

/// Joins an asset root and a catalog URI the way the catalog expects.
pub fn resolve(root: &str, uri: &str) -> String {
    format!("{}/{}", root.trim_end_matches('/'), uri.trim_start_matches('/'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRequest {
    pub code: String,
    pub uri: String,
}

/// What the current question needs before it can be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetJob {
    Flags(Vec<FlagRequest>),
    Map(String),
}

impl AssetJob {
    /// `None` for questions without assets.
    pub fn for_question(question: &Question) -> Option<Result<AssetJob, AssetError>> {
        let Question::Choice(q) = question else {
            return None;
        };
        match (q.kind, &q.prompt) {
            (QuestionKind::FlagToCountry, Prompt::Flag(flag)) => {
                Some(Ok(AssetJob::Flags(vec![FlagRequest {
                    code: q.anchor().code.clone(),
                    uri: flag.local_uri.clone(),
                }])))
            }
            (QuestionKind::CountryToFlag, _) => {
                let requests: Result<Vec<FlagRequest>, AssetError> = q
                    .choices
                    .iter()
                    .map(|c| {
                        crate::questions::flag::flag_of(c).map(|flag| FlagRequest {
                            code: c.code.clone(),
                            uri: flag.local_uri.clone(),
                        })
                    })
                    .collect();
                Some(requests.map(AssetJob::Flags))
            }
            (QuestionKind::MapLocation, Prompt::Map(geo)) => {
                Some(Ok(AssetJob::Map(geo.local_uri.clone())))
            }
            _ => None,
        }
    }

    pub fn uris(&self) -> Vec<String> {
        match self {
            AssetJob::Flags(requests) => requests.iter().map(|r| r.uri.clone()).collect(),
            AssetJob::Map(uri) => vec![uri.clone()],
        }
    }

    /// Decodes fetched bytes, one buffer per entry of `uris()`.
    pub fn decode(self, bytes: Vec<Vec<u8>>) -> Result<LoadedAssets, AssetError> {
        match self {
            AssetJob::Flags(requests) => requests
                .into_iter()
                .zip(bytes)
                .map(|(request, data)| decode_flag(request.code, &data))
                .collect::<Result<Vec<_>, _>>()
                .map(LoadedAssets::Flags),
            AssetJob::Map(uri) => {
                let data = bytes.first().ok_or(AssetError::Missing(uri))?;
                MapShape::from_json(data).map(LoadedAssets::Map)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFlag {
    pub code: String,
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

pub fn decode_flag(code: String, bytes: &[u8]) -> Result<DecodedFlag, AssetError> {
    let image = image::load_from_memory(bytes)
        .map_err(|err| AssetError::Decode(format!("flag of {code}: {err}")))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(DecodedFlag {
        code,
        size,
        rgba: image.into_raw(),
    })
}

#[derive(Deserialize)]
struct MapDocument {
    longitude: f64,
    latitude: f64,
    zoom: f64,
    data: Value,
    #[serde(default)]
    attribution: Option<String>,
}

/// Centre and zoom the outline is drawn at, in web-map zoom levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: f64,
}

impl MapView {
    pub const MIN_ZOOM: f64 = 1.0;
    pub const MAX_ZOOM: f64 = 12.0;

    pub fn new(center: [f64; 2], zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM),
        }
    }

    /// Degrees covered by one screen point (256-point tiles).
    pub fn degrees_per_point(&self) -> f64 {
        360.0 / (256.0 * 2f64.powf(self.zoom))
    }

    pub fn zoom_by(&mut self, steps: f64) {
        self.zoom = (self.zoom + steps).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Moves the centre so the map follows a drag of `dx`, `dy` screen points.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let step = self.degrees_per_point();
        self.center[0] -= dx * step;
        self.center[1] += dy * step;
    }
}

/// Boundary rings of a country in (longitude, latitude) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct MapShape {
    /// View the document asks for; double-click returns here
    pub home: MapView,
    pub rings: Vec<Vec<[f64; 2]>>,
    pub attribution: String,
}

impl MapShape {
    pub fn from_json(bytes: &[u8]) -> Result<Self, AssetError> {
        let doc: MapDocument =
            serde_json::from_slice(bytes).map_err(|err| AssetError::Decode(err.to_string()))?;
        let mut rings = Vec::new();
        collect_rings(&doc.data, &mut rings);
        if rings.is_empty() {
            return Err(AssetError::Decode("map has no polygons".to_string()));
        }
        Ok(Self {
            home: MapView::new([doc.longitude, doc.latitude], doc.zoom),
            rings,
            attribution: doc.attribution.unwrap_or_else(|| "Wikidata".to_string()),
        })
    }
}

fn collect_rings(geo: &Value, out: &mut Vec<Vec<[f64; 2]>>) {
    match geo.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {
            for feature in geo["features"].as_array().into_iter().flatten() {
                collect_rings(feature, out);
            }
        }
        Some("Feature") => collect_rings(&geo["geometry"], out),
        Some("GeometryCollection") => {
            for geometry in geo["geometries"].as_array().into_iter().flatten() {
                collect_rings(geometry, out);
            }
        }
        Some("Polygon") => push_polygon(&geo["coordinates"], out),
        Some("MultiPolygon") => {
            for polygon in geo["coordinates"].as_array().into_iter().flatten() {
                push_polygon(polygon, out);
            }
        }
        _ => {}
    }
}

fn push_polygon(polygon: &Value, out: &mut Vec<Vec<[f64; 2]>>) {
    for ring in polygon.as_array().into_iter().flatten() {
        let points: Vec<[f64; 2]> = ring
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|p| Some([p.get(0)?.as_f64()?, p.get(1)?.as_f64()?]))
            .collect();
        if points.len() >= 3 {
            out.push(points);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadedAssets {
    Flags(Vec<DecodedFlag>),
    Map(MapShape),
}

pub type AssetResult = Result<LoadedAssets, AssetError>;

/// Receiving end of a background load.
pub struct PendingAssets {
    rx: Receiver<AssetResult>,
}

impl PendingAssets {
    pub fn poll(&self) -> Option<AssetResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(AssetError::Fetch("asset loader stopped".to_string())))
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_blocking(root: &str, job: AssetJob) -> AssetResult {
    let bytes = job
        .uris()
        .iter()
        .map(|uri| {
            let path = resolve(root, uri);
            std::fs::read(&path).map_err(|err| AssetError::Io {
                path,
                message: err.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    job.decode(bytes)
}

/// Starts loading on a worker thread; `ctx` is repainted when it finishes.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_load(root: String, job: AssetJob, ctx: egui::Context) -> PendingAssets {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let result = load_blocking(&root, job);
        // receiver gone means the round was replaced
        let _ = tx.send(result);
        ctx.request_repaint();
    });
    PendingAssets { rx }
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_load(root: String, job: AssetJob, ctx: egui::Context) -> PendingAssets {
    let (tx, rx) = mpsc::channel();
    wasm_bindgen_futures::spawn_local(async move {
        let result = load_remote(&root, job).await;
        let _ = tx.send(result);
        ctx.request_repaint();
    });
    PendingAssets { rx }
}

#[cfg(target_arch = "wasm32")]
async fn load_remote(root: &str, job: AssetJob) -> AssetResult {
    let mut bytes = Vec::new();
    for uri in job.uris() {
        bytes.push(fetch_bytes(&resolve(root, &uri)).await?);
    }
    job.decode(bytes)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let failed = || AssetError::Fetch(url.to_string());

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(|_| failed())?;

    let window = web_sys::window().ok_or_else(failed)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| failed())?;
    let response: Response = value.dyn_into().map_err(|_| failed())?;
    if !response.ok() {
        return Err(failed());
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(|_| failed())?)
        .await
        .map_err(|_| failed())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
