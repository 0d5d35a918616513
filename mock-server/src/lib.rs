//! In-memory test double of the matchmaking backend's REST surface.
//!
//! Players are identified by their access token. Matching is deliberately
//! naive: the first open gathering that fits is joined, otherwise a new one
//! is opened. Good enough to drive the client end to end; not a model of the
//! hosted service's rules.

use std::{
    collections::BTreeMap,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const ACCESS_TOKEN_HEADER: &str = "x-gs2-access-token";
pub const SERVICE_CLASSES: [&str; 3] = ["low", "medium", "high"];
const DEFAULT_PAGE_SIZE: usize = 30;
const ATTRIBUTE_COUNT: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchmaking {
    pub matchmaking_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub max_player: u32,
    pub service_class: String,
    pub callback: Option<String>,
    pub create_at: i64,
    pub update_at: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchmaking {
    pub name: String,
    pub description: Option<String>,
    pub service_class: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub max_player: u32,
    pub callback: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchmaking {
    pub description: Option<String>,
    pub service_class: Option<String>,
    pub callback: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomAutoSearch {
    pub attribute1: Option<i64>,
    pub attribute2: Option<i64>,
    pub attribute3: Option<i64>,
    pub attribute4: Option<i64>,
    pub attribute5: Option<i64>,
    pub search_attribute1_min: Option<i64>,
    pub search_attribute2_min: Option<i64>,
    pub search_attribute3_min: Option<i64>,
    pub search_attribute4_min: Option<i64>,
    pub search_attribute5_min: Option<i64>,
    pub search_attribute1_max: Option<i64>,
    pub search_attribute2_max: Option<i64>,
    pub search_attribute3_max: Option<i64>,
    pub search_attribute4_max: Option<i64>,
    pub search_attribute5_max: Option<i64>,
    pub search_context: Option<String>,
}

impl CustomAutoSearch {
    fn attributes(&self) -> [Option<i64>; ATTRIBUTE_COUNT] {
        [self.attribute1, self.attribute2, self.attribute3, self.attribute4, self.attribute5]
    }

    fn ranges(&self) -> [(Option<i64>, Option<i64>); ATTRIBUTE_COUNT] {
        [
            (self.search_attribute1_min, self.search_attribute1_max),
            (self.search_attribute2_min, self.search_attribute2_max),
            (self.search_attribute3_min, self.search_attribute3_max),
            (self.search_attribute4_min, self.search_attribute4_max),
            (self.search_attribute5_min, self.search_attribute5_max),
        ]
    }

    /// A bound with no attribute to compare against never matches.
    fn accepts(&self, attributes: &[Option<i64>; ATTRIBUTE_COUNT]) -> bool {
        self.ranges().iter().zip(attributes).all(|((min, max), attr)| {
            if min.is_none() && max.is_none() {
                return true;
            }
            match attr {
                Some(value) => min.map_or(true, |m| *value >= m) && max.map_or(true, |m| *value <= m),
                None => false,
            }
        })
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateRoom {
    pub meta: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageQuery {
    pub page_token: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Gathering {
    pub gathering_id: String,
    pub join_player: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    pub update_at: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Item<T> {
    pub item: T,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Items<T> {
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAutoReply {
    pub done: bool,
    pub item: Option<Gathering>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_context: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Anybody,
    CustomAuto,
    Passcode,
    Room,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Anybody, Mode::CustomAuto, Mode::Passcode, Mode::Room];

    pub fn segment(self) -> &'static str {
        match self {
            Mode::Anybody => "anybody",
            Mode::CustomAuto => "customauto",
            Mode::Passcode => "passcode",
            Mode::Room => "room",
        }
    }
}

struct GatheringRecord {
    id: String,
    matchmaking_name: String,
    mode: Mode,
    players: Vec<String>,
    passcode: Option<String>,
    meta: Option<String>,
    attributes: [Option<i64>; ATTRIBUTE_COUNT],
    complete: bool,
    update_at: i64,
}

impl GatheringRecord {
    fn view(&self) -> Gathering {
        Gathering {
            gathering_id: self.id.clone(),
            join_player: self.players.len() as u32,
            passcode: self.passcode.clone(),
            meta: self.meta.clone(),
            update_at: self.update_at,
        }
    }
}

#[derive(Default)]
pub struct Backend {
    matchmakings: BTreeMap<String, Matchmaking>,
    gatherings: BTreeMap<String, GatheringRecord>,
    passcodes_issued: u32,
}

impl Backend {
    fn max_player(&self, name: &str) -> Result<u32, StatusCode> {
        self.matchmakings
            .get(name)
            .map(|m| m.max_player)
            .ok_or(StatusCode::NOT_FOUND)
    }

    fn find_open(
        &self,
        name: &str,
        mode: Mode,
        accept: impl Fn(&GatheringRecord) -> bool,
    ) -> Option<String> {
        self.gatherings
            .values()
            .find(|g| g.matchmaking_name == name && g.mode == mode && !g.complete && accept(*g))
            .map(|g| g.id.clone())
    }

    fn open(&mut self, name: &str, mode: Mode, player: String, max_player: u32) -> &mut GatheringRecord {
        let id = Uuid::new_v4().to_string();
        let record = GatheringRecord {
            id: id.clone(),
            matchmaking_name: name.to_string(),
            mode,
            players: vec![player],
            passcode: None,
            meta: None,
            attributes: [None; ATTRIBUTE_COUNT],
            complete: max_player <= 1,
            update_at: now_millis(),
        };
        log::debug!("opened {} gathering {id} in {name}", mode.segment());
        self.gatherings.entry(id).or_insert(record)
    }

    fn gathering(&self, name: &str, mode: Mode, id: &str) -> Result<&GatheringRecord, StatusCode> {
        self.gatherings
            .get(id)
            .filter(|g| g.matchmaking_name == name && g.mode == mode)
            .ok_or(StatusCode::NOT_FOUND)
    }

    fn gathering_mut(
        &mut self,
        name: &str,
        mode: Mode,
        id: &str,
    ) -> Result<&mut GatheringRecord, StatusCode> {
        self.gatherings
            .get_mut(id)
            .filter(|g| g.matchmaking_name == name && g.mode == mode)
            .ok_or(StatusCode::NOT_FOUND)
    }

    fn join(&mut self, name: &str, mode: Mode, id: &str, player: String) -> Result<Gathering, StatusCode> {
        let max_player = self.max_player(name)?;
        let gathering = self.gathering_mut(name, mode, id)?;
        if !gathering.players.contains(&player) {
            if gathering.complete || gathering.players.len() as u32 >= max_player {
                return Err(StatusCode::CONFLICT);
            }
            gathering.players.push(player);
        }
        if gathering.players.len() as u32 >= max_player {
            gathering.complete = true;
        }
        gathering.update_at = now_millis();
        Ok(gathering.view())
    }

    fn next_passcode(&mut self) -> String {
        self.passcodes_issued += 1;
        format!("{:08}", 10_000_000 + self.passcodes_issued)
    }
}

pub type Db = Arc<RwLock<Backend>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Backend::default()));
    let mut router = Router::new()
        .route("/matchmaking", get(describe_matchmaking).post(create_matchmaking))
        .route("/matchmaking/serviceClass", get(describe_service_class))
        .route(
            "/matchmaking/{name}",
            get(get_matchmaking).put(update_matchmaking).delete(delete_matchmaking),
        )
        .route("/matchmaking/{name}/status", get(get_matchmaking_status))
        .route("/matchmaking/{name}/anybody", post(anybody_do_matchmaking))
        .route("/matchmaking/{name}/customauto", post(custom_auto_do_matchmaking))
        .route("/matchmaking/{name}/passcode", post(passcode_create_gathering))
        .route("/matchmaking/{name}/passcode/join/{passcode}", post(passcode_join_gathering))
        .route(
            "/matchmaking/{name}/passcode/{gathering_id}",
            delete(|s: State<Db>, p: Path<(String, String)>, h: HeaderMap| {
                breakup_gathering(Mode::Passcode, s, p, h)
            }),
        )
        .route("/matchmaking/{name}/room", post(room_create_gathering))
        .route("/matchmaking/{name}/room/", get(room_describe_gathering))
        .route(
            "/matchmaking/{name}/room/{gathering_id}",
            post(room_join_gathering).delete(|s: State<Db>, p: Path<(String, String)>, h: HeaderMap| {
                breakup_gathering(Mode::Room, s, p, h)
            }),
        );

    for mode in Mode::ALL {
        let segment = mode.segment();
        router = router.route(
            &format!("/matchmaking/{{name}}/{segment}/{{gathering_id}}/player"),
            get(move |s: State<Db>, p: Path<(String, String)>, h: HeaderMap| {
                describe_joined_user(mode, s, p, h)
            })
            .delete(move |s: State<Db>, p: Path<(String, String)>, h: HeaderMap| {
                leave_gathering(mode, s, p, h)
            }),
        );
    }
    for mode in [Mode::Passcode, Mode::Room] {
        let segment = mode.segment();
        router = router.route(
            &format!("/matchmaking/{{name}}/{segment}/{{gathering_id}}/complete"),
            post(move |s: State<Db>, p: Path<(String, String)>, h: HeaderMap| {
                early_complete_gathering(mode, s, p, h)
            }),
        );
    }

    router.with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

fn player(headers: &HeaderMap) -> Result<String, StatusCode> {
    headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(StatusCode::UNAUTHORIZED)
}

fn paginate<T>(mut items: Vec<T>, page: &PageQuery) -> Result<Items<T>, StatusCode> {
    let start = match page.page_token.as_deref() {
        Some(token) => token.parse::<usize>().map_err(|_| StatusCode::BAD_REQUEST)?,
        None => 0,
    };
    let limit = page.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_SIZE);
    if start >= items.len() {
        return Ok(Items { items: Vec::new(), next_page_token: None });
    }
    let end = start.saturating_add(limit).min(items.len());
    let next_page_token = (end < items.len()).then(|| end.to_string());
    Ok(Items {
        items: items.drain(start..end).collect(),
        next_page_token,
    })
}

// --- matchmaking definitions ---

async fn describe_matchmaking(
    State(db): State<Db>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Items<Matchmaking>>, StatusCode> {
    let backend = db.read().await;
    let all = backend.matchmakings.values().cloned().collect();
    paginate(all, &page).map(Json)
}

async fn describe_service_class() -> Json<Items<String>> {
    Json(Items {
        items: SERVICE_CLASSES.iter().map(|c| c.to_string()).collect(),
        next_page_token: None,
    })
}

async fn create_matchmaking(
    State(db): State<Db>,
    Json(input): Json<CreateMatchmaking>,
) -> Result<Json<Item<Matchmaking>>, StatusCode> {
    let mut backend = db.write().await;
    if backend.matchmakings.contains_key(&input.name) {
        return Err(StatusCode::CONFLICT);
    }
    if input.max_player == 0 {
        return Err(StatusCode::BAD_REQUEST);
    }
    let now = now_millis();
    let matchmaking = Matchmaking {
        matchmaking_id: format!("matchmaking:{}", Uuid::new_v4()),
        owner_id: "owner".to_string(),
        name: input.name,
        description: input.description,
        kind: input.kind,
        max_player: input.max_player,
        service_class: input.service_class,
        callback: input.callback,
        create_at: now,
        update_at: now,
    };
    log::info!("created matchmaking {}", matchmaking.name);
    backend.matchmakings.insert(matchmaking.name.clone(), matchmaking.clone());
    Ok(Json(Item { item: matchmaking }))
}

async fn get_matchmaking(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<Item<Matchmaking>>, StatusCode> {
    let backend = db.read().await;
    let matchmaking = backend.matchmakings.get(&name).cloned().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(Item { item: matchmaking }))
}

async fn get_matchmaking_status(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let backend = db.read().await;
    backend.max_player(&name)?;
    Ok(Json(serde_json::json!({ "status": "ACTIVE" })))
}

async fn update_matchmaking(
    State(db): State<Db>,
    Path(name): Path<String>,
    Json(input): Json<UpdateMatchmaking>,
) -> Result<Json<Item<Matchmaking>>, StatusCode> {
    let mut backend = db.write().await;
    let matchmaking = backend.matchmakings.get_mut(&name).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(description) = input.description {
        matchmaking.description = Some(description);
    }
    if let Some(service_class) = input.service_class {
        matchmaking.service_class = service_class;
    }
    if let Some(callback) = input.callback {
        matchmaking.callback = Some(callback);
    }
    matchmaking.update_at = now_millis();
    Ok(Json(Item { item: matchmaking.clone() }))
}

async fn delete_matchmaking(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut backend = db.write().await;
    backend.matchmakings.remove(&name).ok_or(StatusCode::NOT_FOUND)?;
    backend.gatherings.retain(|_, g| g.matchmaking_name != name);
    log::info!("deleted matchmaking {name}");
    Ok(StatusCode::NO_CONTENT)
}

// --- matchmaking modes ---

async fn anybody_do_matchmaking(
    State(db): State<Db>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Item<Gathering>>, StatusCode> {
    let player = player(&headers)?;
    let mut backend = db.write().await;
    let max_player = backend.max_player(&name)?;
    let gathering = match backend.find_open(&name, Mode::Anybody, |_| true) {
        Some(id) => backend.join(&name, Mode::Anybody, &id, player)?,
        None => backend.open(&name, Mode::Anybody, player, max_player).view(),
    };
    Ok(Json(Item { item: gathering }))
}

async fn custom_auto_do_matchmaking(
    State(db): State<Db>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Json(search): Json<CustomAutoSearch>,
) -> Result<Json<CustomAutoReply>, StatusCode> {
    let player = player(&headers)?;
    let mut backend = db.write().await;
    let max_player = backend.max_player(&name)?;
    let gathering = match backend.find_open(&name, Mode::CustomAuto, |g| search.accepts(&g.attributes)) {
        Some(id) => backend.join(&name, Mode::CustomAuto, &id, player)?,
        None => {
            let record = backend.open(&name, Mode::CustomAuto, player, max_player);
            record.attributes = search.attributes();
            record.view()
        }
    };
    Ok(Json(CustomAutoReply {
        done: true,
        item: Some(gathering),
        search_context: None,
    }))
}

async fn passcode_create_gathering(
    State(db): State<Db>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Item<Gathering>>, StatusCode> {
    let player = player(&headers)?;
    let mut backend = db.write().await;
    let max_player = backend.max_player(&name)?;
    let passcode = backend.next_passcode();
    let record = backend.open(&name, Mode::Passcode, player, max_player);
    record.passcode = Some(passcode);
    Ok(Json(Item { item: record.view() }))
}

async fn passcode_join_gathering(
    State(db): State<Db>,
    Path((name, passcode)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Item<Gathering>>, StatusCode> {
    let player = player(&headers)?;
    let mut backend = db.write().await;
    let id = backend
        .gatherings
        .values()
        .find(|g| {
            g.matchmaking_name == name
                && g.mode == Mode::Passcode
                && g.passcode.as_deref() == Some(passcode.as_str())
        })
        .map(|g| g.id.clone())
        .ok_or(StatusCode::NOT_FOUND)?;
    let gathering = backend.join(&name, Mode::Passcode, &id, player)?;
    Ok(Json(Item { item: gathering }))
}

async fn room_create_gathering(
    State(db): State<Db>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Json(input): Json<CreateRoom>,
) -> Result<Json<Item<Gathering>>, StatusCode> {
    let player = player(&headers)?;
    let mut backend = db.write().await;
    let max_player = backend.max_player(&name)?;
    let record = backend.open(&name, Mode::Room, player, max_player);
    record.meta = input.meta;
    Ok(Json(Item { item: record.view() }))
}

async fn room_join_gathering(
    State(db): State<Db>,
    Path((name, gathering_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Item<Gathering>>, StatusCode> {
    let player = player(&headers)?;
    let mut backend = db.write().await;
    let gathering = backend.join(&name, Mode::Room, &gathering_id, player)?;
    Ok(Json(Item { item: gathering }))
}

async fn room_describe_gathering(
    State(db): State<Db>,
    Path(name): Path<String>,
    Query(page): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Json<Items<Gathering>>, StatusCode> {
    player(&headers)?;
    let backend = db.read().await;
    backend.max_player(&name)?;
    let open = backend
        .gatherings
        .values()
        .filter(|g| g.matchmaking_name == name && g.mode == Mode::Room && !g.complete)
        .map(GatheringRecord::view)
        .collect();
    paginate(open, &page).map(Json)
}

// --- per-gathering operations shared by the modes ---

async fn describe_joined_user(
    mode: Mode,
    State(db): State<Db>,
    Path((name, gathering_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Items<String>>, StatusCode> {
    player(&headers)?;
    let backend = db.read().await;
    let gathering = backend.gathering(&name, mode, &gathering_id)?;
    Ok(Json(Items {
        items: gathering.players.clone(),
        next_page_token: None,
    }))
}

async fn leave_gathering(
    mode: Mode,
    State(db): State<Db>,
    Path((name, gathering_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let player = player(&headers)?;
    let mut backend = db.write().await;
    let gathering = backend.gathering_mut(&name, mode, &gathering_id)?;
    let position = gathering
        .players
        .iter()
        .position(|p| *p == player)
        .ok_or(StatusCode::NOT_FOUND)?;
    gathering.players.remove(position);
    gathering.update_at = now_millis();
    if gathering.players.is_empty() {
        backend.gatherings.remove(&gathering_id);
        log::debug!("gathering {gathering_id} emptied");
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn breakup_gathering(
    mode: Mode,
    State(db): State<Db>,
    Path((name, gathering_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    player(&headers)?;
    let mut backend = db.write().await;
    backend.gathering_mut(&name, mode, &gathering_id)?;
    backend.gatherings.remove(&gathering_id);
    log::debug!("gathering {gathering_id} broken up");
    Ok(StatusCode::NO_CONTENT)
}

async fn early_complete_gathering(
    mode: Mode,
    State(db): State<Db>,
    Path((name, gathering_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    player(&headers)?;
    let mut backend = db.write().await;
    let gathering = backend.gathering_mut(&name, mode, &gathering_id)?;
    gathering.complete = true;
    gathering.update_at = now_millis();
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(min: Option<i64>, max: Option<i64>) -> CustomAutoSearch {
        CustomAutoSearch {
            search_attribute1_min: min,
            search_attribute1_max: max,
            ..Default::default()
        }
    }

    #[test]
    fn search_without_bounds_accepts_anything() {
        assert!(search(None, None).accepts(&[None; ATTRIBUTE_COUNT]));
    }

    #[test]
    fn search_bounds_are_inclusive() {
        let attrs = [Some(1500), None, None, None, None];
        assert!(search(Some(1500), Some(1500)).accepts(&attrs));
        assert!(search(Some(1400), None).accepts(&attrs));
        assert!(!search(Some(1501), None).accepts(&attrs));
        assert!(!search(None, Some(1499)).accepts(&attrs));
    }

    #[test]
    fn search_bound_on_missing_attribute_rejects() {
        assert!(!search(Some(0), None).accepts(&[None; ATTRIBUTE_COUNT]));
    }

    #[test]
    fn search_deserializes_wire_names() {
        let input: CustomAutoSearch = serde_json::from_str(
            r#"{"attribute2":7,"searchAttribute2Min":5,"searchAttribute2Max":9,"searchContext":"c"}"#,
        )
        .unwrap();
        assert_eq!(input.attributes()[1], Some(7));
        assert_eq!(input.ranges()[1], (Some(5), Some(9)));
        assert_eq!(input.search_context.as_deref(), Some("c"));
    }

    #[test]
    fn paginate_splits_pages() {
        let page = paginate(
            (0..5).collect::<Vec<_>>(),
            &PageQuery { page_token: None, limit: Some(2) },
        )
        .unwrap();
        assert_eq!(page.items, vec![0, 1]);
        assert_eq!(page.next_page_token.as_deref(), Some("2"));

        let last = paginate(
            (0..5).collect::<Vec<_>>(),
            &PageQuery { page_token: Some("4".to_string()), limit: Some(2) },
        )
        .unwrap();
        assert_eq!(last.items, vec![4]);
        assert!(last.next_page_token.is_none());
    }

    #[test]
    fn paginate_huge_limit_returns_rest() {
        let page = paginate(
            (0..5).collect::<Vec<_>>(),
            &PageQuery { page_token: Some("3".to_string()), limit: Some(usize::MAX) },
        )
        .unwrap();
        assert_eq!(page.items, vec![3, 4]);
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn gathering_lookup_checks_owner_and_mode() {
        let mut backend = Backend::default();
        let id = backend.open("lobby", Mode::Room, "alice".to_string(), 4).id.clone();
        assert_eq!(backend.gathering("lobby", Mode::Room, &id).unwrap().players, vec!["alice"]);
        assert_eq!(backend.gathering("lobby", Mode::Passcode, &id).err(), Some(StatusCode::NOT_FOUND));
        assert_eq!(backend.gathering("other", Mode::Room, &id).err(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn paginate_rejects_garbage_token() {
        let err = paginate(vec![1], &PageQuery { page_token: Some("x".to_string()), limit: None });
        assert_eq!(err.err(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn passcodes_are_eight_digits_and_unique() {
        let mut backend = Backend::default();
        let first = backend.next_passcode();
        let second = backend.next_passcode();
        assert_eq!(first.len(), 8);
        assert!(first.bytes().all(|b| b.is_ascii_digit()));
        assert_ne!(first, second);
    }
}
