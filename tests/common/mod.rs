// Fake capabilities shared by the host-side tests.

#![allow(dead_code)]

use jst_kidding_web::core::{
    AudioContextHandle, AudioError, AudioPlatform, Cues, OverlaySurface, Rect, SpeechEngine,
    SpeechError, ToneSpec, Transition, Utterance, Viewport, Waveform, ZoomImage,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ---------------- Overlay surface ----------------

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Mount(ZoomImage),
    Place(Rect, Option<u32>),
    Reveal(u32),
    Unmount,
    Overflow(String),
}

#[derive(Debug)]
pub struct SurfaceLog {
    pub ops: Vec<SurfaceOp>,
    pub overflow: String,
    pub mounted: bool,
}

#[derive(Clone)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64, overflow: &str) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            log: Rc::new(RefCell::new(SurfaceLog {
                ops: Vec::new(),
                overflow: overflow.to_string(),
                mounted: false,
            })),
        }
    }

    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.log.borrow().ops.clone()
    }

    pub fn overflow(&self) -> String {
        self.log.borrow().overflow.clone()
    }

    pub fn mounted(&self) -> bool {
        self.log.borrow().mounted
    }

    pub fn last_place(&self) -> Option<(Rect, Option<u32>)> {
        self.log.borrow().ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Place(rect, ms) => Some((*rect, *ms)),
            _ => None,
        })
    }
}

impl OverlaySurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn mount(&mut self, image: &ZoomImage) {
        let mut log = self.log.borrow_mut();
        log.mounted = true;
        log.ops.push(SurfaceOp::Mount(image.clone()));
    }

    fn place(&mut self, rect: Rect, transition: Option<&Transition>) {
        self.log
            .borrow_mut()
            .ops
            .push(SurfaceOp::Place(rect, transition.map(|t| t.duration_ms)));
    }

    fn reveal(&mut self, fade_ms: u32) {
        self.log.borrow_mut().ops.push(SurfaceOp::Reveal(fade_ms));
    }

    fn unmount(&mut self) {
        let mut log = self.log.borrow_mut();
        log.mounted = false;
        log.ops.push(SurfaceOp::Unmount);
    }

    fn scroll_overflow(&self) -> String {
        self.log.borrow().overflow.clone()
    }

    fn set_scroll_overflow(&mut self, value: &str) {
        let mut log = self.log.borrow_mut();
        log.overflow = value.to_string();
        log.ops.push(SurfaceOp::Overflow(value.to_string()));
    }
}

// ---------------- Audio platform ----------------

#[derive(Default)]
pub struct AudioLog {
    pub created: Cell<u32>,
    pub resumed: Cell<u32>,
    pub played: RefCell<Vec<(f64, ToneSpec)>>,
}

impl AudioLog {
    pub fn waveforms(&self) -> Vec<Waveform> {
        self.played.borrow().iter().map(|(_, t)| t.waveform).collect()
    }
}

pub struct FakeContext {
    pub now: f64,
    pub suspended: Cell<bool>,
    pub log: Rc<AudioLog>,
}

impl AudioContextHandle for FakeContext {
    fn current_time(&self) -> f64 {
        self.now
    }

    fn is_suspended(&self) -> bool {
        self.suspended.get()
    }

    fn resume(&self) {
        self.suspended.set(false);
        self.log.resumed.set(self.log.resumed.get() + 1);
    }

    fn play_tone(&self, now: f64, tone: &ToneSpec) -> Result<(), AudioError> {
        self.log.played.borrow_mut().push((now, *tone));
        Ok(())
    }
}

pub struct FakeAudio {
    pub available: bool,
    pub now: f64,
    pub log: Rc<AudioLog>,
}

impl FakeAudio {
    pub fn available(now: f64) -> (Self, Rc<AudioLog>) {
        let log = Rc::new(AudioLog::default());
        (
            Self {
                available: true,
                now,
                log: log.clone(),
            },
            log,
        )
    }

    pub fn missing() -> (Self, Rc<AudioLog>) {
        let log = Rc::new(AudioLog::default());
        (
            Self {
                available: false,
                now: 0.0,
                log: log.clone(),
            },
            log,
        )
    }
}

impl AudioPlatform for FakeAudio {
    type Context = FakeContext;

    fn create_context(&self) -> Result<FakeContext, AudioError> {
        self.log.created.set(self.log.created.get() + 1);
        if !self.available {
            return Err(AudioError::Unavailable);
        }
        Ok(FakeContext {
            now: self.now,
            suspended: Cell::new(true),
            log: self.log.clone(),
        })
    }
}

// ---------------- Speech engine ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeechMode {
    Supported,
    Unsupported,
    CancelThrows,
    SpeakThrows,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpokenLine {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

#[derive(Default)]
pub struct SpeechLog {
    pub cancels: Cell<u32>,
    pub spoken: RefCell<Vec<SpokenLine>>,
}

pub struct FakeSpeech {
    pub mode: SpeechMode,
    pub log: Rc<SpeechLog>,
}

impl FakeSpeech {
    pub fn new(mode: SpeechMode) -> (Self, Rc<SpeechLog>) {
        let log = Rc::new(SpeechLog::default());
        (
            Self {
                mode,
                log: log.clone(),
            },
            log,
        )
    }
}

impl SpeechEngine for FakeSpeech {
    fn is_supported(&self) -> bool {
        self.mode != SpeechMode::Unsupported
    }

    fn cancel(&self) -> Result<(), SpeechError> {
        if self.mode == SpeechMode::CancelThrows {
            return Err(SpeechError::Rejected("cancel".into()));
        }
        self.log.cancels.set(self.log.cancels.get() + 1);
        Ok(())
    }

    fn speak(&self, utterance: &Utterance<'_>) -> Result<(), SpeechError> {
        if self.mode == SpeechMode::SpeakThrows {
            return Err(SpeechError::Rejected("speak".into()));
        }
        self.log.spoken.borrow_mut().push(SpokenLine {
            text: utterance.text.to_string(),
            lang: utterance.lang.to_string(),
            rate: utterance.rate,
            pitch: utterance.pitch,
            volume: utterance.volume,
        });
        Ok(())
    }
}

// ---------------- Grid cues ----------------

#[derive(Default)]
pub struct RecordingCues {
    pub events: RefCell<Vec<String>>,
}

impl RecordingCues {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl Cues for RecordingCues {
    fn pop(&self) {
        self.events.borrow_mut().push("pop".into());
    }

    fn boing(&self) {
        self.events.borrow_mut().push("boing".into());
    }

    fn speak(&self, line: &str) {
        self.events.borrow_mut().push(format!("speak:{}", line));
    }
}
