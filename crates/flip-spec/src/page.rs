use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::{
    card::{CardEvent, FlipCard, Transition},
    spec::unit::VideoUnit,
    store::UnitStore,
    view::CardView,
};

pub const DEFAULT_HEADING: &str = "FlipStudy";
pub const DEFAULT_SUBHEADING: &str =
    "See key points from the video and answer related AP-style questions.";
pub const EMPTY_STATE_MESSAGE: &str = "No video unit data found.";
pub const VIDEO_FALLBACK_TEXT: &str = "Your browser does not support the video tag.";

/// Which unit a page mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitSelector {
    Index(usize),
    Id(String),
}

impl Default for UnitSelector {
    fn default() -> Self {
        UnitSelector::Index(0)
    }
}

impl UnitSelector {
    pub fn resolve<'a>(&self, store: &'a UnitStore) -> Option<&'a VideoUnit> {
        match self {
            UnitSelector::Index(index) => store.unit_at(*index),
            UnitSelector::Id(id) => store.find(id),
        }
    }
}

impl FromStr for UnitSelector {
    type Err = std::convert::Infallible;

    /// `id:<ID>` selects by unit id, bare digits by position, anything else by id.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if let Some(id) = raw.strip_prefix("id:") {
            return Ok(UnitSelector::Id(id.to_string()));
        }
        Ok(match raw.parse::<usize>() {
            Ok(index) => UnitSelector::Index(index),
            Err(_) => UnitSelector::Id(raw.to_string()),
        })
    }
}

/// Page-level presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePolicy {
    pub unit: UnitSelector,
    pub heading: String,
    pub subheading: String,
    pub empty_message: String,
}

impl Default for PagePolicy {
    fn default() -> Self {
        Self {
            unit: UnitSelector::default(),
            heading: DEFAULT_HEADING.to_string(),
            subheading: DEFAULT_SUBHEADING.to_string(),
            empty_message: EMPTY_STATE_MESSAGE.to_string(),
        }
    }
}

/// Embedded video element description handed to the media collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoView {
    pub src: String,
    pub controls: bool,
    pub preload: String,
    pub fallback_text: String,
}

impl VideoView {
    fn for_url(url: &str) -> Self {
        Self {
            src: url.to_string(),
            controls: true,
            preload: "metadata".to_string(),
            fallback_text: VIDEO_FALLBACK_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageView {
    Empty {
        message: String,
    },
    #[serde(rename = "ready")]
    Unit {
        unit_id: String,
        title: String,
        heading: String,
        subheading: String,
        video: VideoView,
        cards: Vec<CardView>,
    },
}

impl PageView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            PageView::Empty { .. } => &[],
            PageView::Unit { cards, .. } => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PageView::Empty { .. })
    }
}

#[derive(Debug, Clone)]
struct MountedUnit {
    id: String,
    title: String,
    video_url: String,
    cards: Vec<FlipCard>,
}

/// A mounted study page: one unit and a card per question.
#[derive(Debug, Clone)]
pub struct Page {
    policy: PagePolicy,
    unit: Option<MountedUnit>,
}

impl Page {
    /// Selects the unit once and builds its cards in question order.
    pub fn mount(store: &UnitStore, policy: PagePolicy) -> Self {
        let unit = policy.unit.resolve(store).map(|unit| {
            debug!(
                "[Page] Mounting unit '{}' with {} card(s)",
                unit.id,
                unit.questions.len()
            );
            MountedUnit {
                id: unit.id.clone(),
                title: unit.title.clone(),
                video_url: unit.video_url.clone(),
                cards: unit
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(index, question)| FlipCard::new(unit.card_key(index), question.clone()))
                    .collect(),
            }
        });
        if unit.is_none() {
            warn!("[Page] No unit matches {:?}", policy.unit);
        }
        Self { policy, unit }
    }

    pub fn is_empty(&self) -> bool {
        self.unit.is_none()
    }

    pub fn unit_id(&self) -> Option<&str> {
        self.unit.as_ref().map(|unit| unit.id.as_str())
    }

    pub fn cards(&self) -> &[FlipCard] {
        self.unit
            .as_ref()
            .map(|unit| unit.cards.as_slice())
            .unwrap_or_default()
    }

    pub fn card(&self, index: usize) -> Option<&FlipCard> {
        self.cards().get(index)
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut FlipCard> {
        self.unit
            .as_mut()
            .and_then(|unit| unit.cards.get_mut(index))
    }

    /// Routes an event to the card at `index`; `None` if there is no such card.
    pub fn dispatch(&mut self, index: usize, event: CardEvent) -> Option<Transition> {
        self.card_mut(index).map(|card| card.apply(event))
    }

    pub fn view(&self) -> PageView {
        match &self.unit {
            None => PageView::Empty {
                message: self.policy.empty_message.clone(),
            },
            Some(unit) => PageView::Unit {
                unit_id: unit.id.clone(),
                title: unit.title.clone(),
                heading: self.policy.heading.clone(),
                subheading: self.policy.subheading.clone(),
                video: VideoView::for_url(&unit.video_url),
                cards: unit.cards.iter().map(FlipCard::view).collect(),
            },
        }
    }
}
