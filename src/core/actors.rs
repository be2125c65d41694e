//! Actor roster and grid interaction state.

use crate::core::geometry::Rect;
use crate::core::overlay::{FrameTicket, OverlaySurface, ZoomImage, ZoomOverlay};
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub line: &'static str,
    /// Hex accent used for the bubble shadow.
    pub accent: &'static str,
    /// Recorded line; reserved, the synthesized line is used for now.
    pub audio: Option<&'static str>,
}

impl Actor {
    pub fn face_alt(&self) -> String {
        format!("{} face", self.name)
    }

    pub fn zoom_image(&self) -> ZoomImage {
        ZoomImage {
            src: self.image.to_string(),
            alt: format!("{} image", self.name),
        }
    }
}

pub const ROSTER: &[Actor] = &[
    Actor {
        id: "mohanlal",
        name: "Mohanlal",
        image: "/cartoon-mohanlal-pop-art.png",
        line: "എന്റെ സ്റ്റൈൽ, മനസിലായോ?",
        accent: "#F97316",
        audio: None,
    },
    Actor {
        id: "mammootty",
        name: "Mammootty",
        image: "/cartoon-mammootty-pop-art.png",
        line: "കിടിലൻ ക്ലാസ്, അല്ലേ?",
        accent: "#E11D48",
        audio: None,
    },
    Actor {
        id: "parunth-vasu",
        name: "Parunth Vasu",
        image: "/cartoon-parunth-vasu.png",
        line: "പറുന്ത് വാസു എത്തിയല്ലോ!",
        accent: "#10B981",
        audio: None,
    },
    Actor {
        id: "jagathy",
        name: "Jagathy",
        image: "/cartoon-jagathy-pop-art.png",
        line: "കൂട്ടുകാരാ, കിടു പ്ലാൻ!",
        accent: "#A855F7",
        audio: None,
    },
    Actor {
        id: "sayip",
        name: "sayip",
        image: "/cartoon-sayip-op.png",
        line: "അയ്യോ അമ്മേ!",
        accent: "#F59E0B",
        audio: None,
    },
    Actor {
        id: "suraj",
        name: "Prithvi",
        image: "/cartoon-pop-art-suraj.png",
        line: "ചിരിച്ചു മരിച്ചു പോകാം!",
        accent: "#EF4444",
        audio: None,
    },
    Actor {
        id: "jayasurya",
        name: "George Sir",
        image: "/cartoon-pop-art-jayasurya.png",
        line: "ഡബ്ള്‍ ആക്ഷൻ റെഡി!",
        accent: "#14B8A6",
        audio: None,
    },
    Actor {
        id: "fahadh",
        name: "Madhav",
        image: "/cartoon-pop-art-face.png",
        line: "വൈബ് മനസ്സിലായോ?",
        accent: "#8B5CF6",
        audio: None,
    },
];

/// Reactions played when an actor is tapped.
pub trait Cues {
    fn pop(&self);
    fn boing(&self);
    fn speak(&self, line: &str);
}

/// Identifies the auto-clear timer armed by one tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearToken(u64);

pub struct ActorGrid {
    actors: Vec<Actor>,
    active: Option<(usize, ClearToken)>,
    pulse: u64,
    next_token: u64,
    rng: StdRng,
}

impl ActorGrid {
    pub fn new(actors: Vec<Actor>, rng: StdRng) -> Self {
        Self {
            actors,
            active: None,
            pulse: 0,
            next_token: 0,
            rng,
        }
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.map(|(index, _)| index)
    }

    pub fn active(&self) -> Option<&Actor> {
        self.active_index().and_then(|i| self.actors.get(i))
    }

    /// Bumped on every tap; cards are re-mounted when it changes so the
    /// bubble animation restarts.
    pub fn pulse(&self) -> u64 {
        self.pulse
    }

    /// Pop, speak the actor's line and highlight it. The returned token must
    /// be passed to [`ActorGrid::expire`] once the highlight timeout fires.
    pub fn tap(&mut self, index: usize, cues: &impl Cues) -> Option<ClearToken> {
        let actor = self.actors.get(index)?;
        cues.pop();
        cues.speak(actor.line);
        log::info!("[grid] tap {}", actor.id);
        self.next_token += 1;
        let token = ClearToken(self.next_token);
        self.active = Some((index, token));
        self.pulse += 1;
        Some(token)
    }

    /// Image tap: zoom from `rect`, then react as for a name tap.
    pub fn tap_image<S: OverlaySurface>(
        &mut self,
        index: usize,
        rect: Option<Rect>,
        overlay: &mut ZoomOverlay<S>,
        cues: &impl Cues,
    ) -> Option<(Option<FrameTicket>, ClearToken)> {
        let image = self.actors.get(index)?.zoom_image();
        let ticket = overlay.open(rect, image);
        let token = self.tap(index, cues)?;
        Some((ticket, token))
    }

    /// Boing, then tap a random actor, avoiding the active one when possible.
    pub fn random(&mut self, cues: &impl Cues) -> Option<(usize, ClearToken)> {
        let count = self.actors.len();
        if count == 0 {
            return None;
        }
        cues.boing();
        let mut choice = self.rng.gen_range(0..count);
        if Some(choice) == self.active_index() && count > 1 {
            let others: Vec<usize> = (0..count).filter(|&i| i != choice).collect();
            choice = *others.choose(&mut self.rng)?;
        }
        let token = self.tap(choice, cues)?;
        Some((choice, token))
    }

    /// Clear the highlight if `token` is still the latest tap.
    pub fn expire(&mut self, token: ClearToken) -> bool {
        match self.active {
            Some((_, current)) if current == token => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}
