//! Per-run controller driving the label/select/save loop.
//!
//! A [`Session`] walks the input images one at a time. Each image gets a fresh
//! [`ImageContext`] holding its grid, display scale, armed label and
//! selection. Input arrives as [`InputEvent`]s, at most one per call to
//! [`Session::step`], and every state change is reported back as a
//! [`Notice`] so the caller can echo it to the operator.

use std::fmt;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::config::{Command, SessionConfig};
use crate::export::export_selections;
use crate::grid::{GridGeometry, Point};
use crate::input::{base_name, file_name, load_image};
use crate::label::{Label, SessionCounters};
use crate::output::OutputSession;
use crate::scale::DisplayScale;
use crate::selection::{ClickOutcome, Selection};

/// One input event delivered by the display surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(char),
    /// Primary button press, in display-space pixels.
    Click(Point),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Viewing,
    Exporting,
    Advancing,
    /// Exit requested; the open image was exported and the run is over.
    Terminating,
    /// Every image was handled.
    Done,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Terminating | Self::Done)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewing => write!(f, "Viewing"),
            Self::Exporting => write!(f, "Exporting"),
            Self::Advancing => write!(f, "Advancing"),
            Self::Terminating => write!(f, "Terminating"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// Operator-facing report of a state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    ImageOpened {
        file: String,
        ordinal: usize,
        total: usize,
    },
    ImageUnreadable {
        file: String,
        reason: String,
    },
    LabelArmed(Label),
    Click(ClickOutcome),
    ExportFailed {
        path: PathBuf,
        reason: String,
    },
    Saved {
        written: usize,
        before_exit: bool,
    },
    Skipped,
    Finished {
        counters: SessionCounters,
    },
    Terminated {
        counters: SessionCounters,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageOpened {
                file,
                ordinal,
                total,
            } => write!(f, "Viewing: {file} ({} of {total})", ordinal + 1),
            Self::ImageUnreadable { file, reason } => {
                write!(f, "Skipping unreadable image {file}: {reason}")
            }
            Self::LabelArmed(label) => write!(f, "Current label: {label}"),
            Self::Click(outcome) => write!(f, "{outcome}"),
            Self::ExportFailed { path, reason } => {
                write!(f, "ERROR: could not save {}: {reason}", path.display())
            }
            Self::Saved {
                written,
                before_exit: false,
            } => write!(f, "Saved {written} crops."),
            Self::Saved {
                written,
                before_exit: true,
            } => write!(f, "Saved {written} crops before exit."),
            Self::Skipped => write!(f, "Skipped image."),
            Self::Finished { counters } => write!(
                f,
                "All images processed. {} crops saved to session folder.",
                counters.total()
            ),
            Self::Terminated { .. } => {
                write!(f, "Exited program. Crops saved to session folder.")
            }
        }
    }
}

/// State of the image currently on screen. Replaced wholesale when the
/// session advances, so nothing carries over between images.
#[derive(Debug)]
pub struct ImageContext {
    pub path: PathBuf,
    pub file_name: String,
    pub base_name: String,
    /// Zero-based position in the input list.
    pub ordinal: usize,
    pub total: usize,
    pub image: DynamicImage,
    pub geometry: GridGeometry,
    pub scale: DisplayScale,
    pub selection: Selection,
    pub armed: Option<Label>,
}

impl ImageContext {
    pub fn new(
        path: &Path,
        ordinal: usize,
        total: usize,
        image: DynamicImage,
        config: &SessionConfig,
    ) -> Self {
        let (width, height) = (image.width(), image.height());
        Self {
            path: path.to_path_buf(),
            file_name: file_name(path),
            base_name: base_name(path),
            ordinal,
            total,
            geometry: GridGeometry::new(width, height, config.grid.rows, config.grid.cols),
            scale: DisplayScale::compute(
                width,
                height,
                config.display.max_width,
                config.display.max_height,
            ),
            image,
            selection: Selection::new(),
            armed: None,
        }
    }

    pub fn arm(&mut self, label: Label) {
        self.armed = Some(label);
    }

    /// Cell under a display-space point.
    pub fn cell_at(&self, pos: Point) -> Option<usize> {
        self.geometry.locate(self.scale.to_original(pos))
    }

    /// Apply a click at a display-space point. Returns `None` when no label
    /// is armed or the point is outside every cell.
    pub fn click(&mut self, pos: Point) -> Option<ClickOutcome> {
        let Some(armed) = self.armed.as_ref() else {
            tracing::debug!("Click at {pos:?} ignored: no label armed");
            return None;
        };
        let Some(cell) = self.cell_at(pos) else {
            tracing::debug!("Click at {pos:?} is outside the grid");
            return None;
        };
        Some(self.selection.apply_click(cell, armed))
    }
}

/// One run of the tool over a list of images.
pub struct Session {
    config: SessionConfig,
    output: OutputSession,
    images: Vec<PathBuf>,
    next: usize,
    current: Option<ImageContext>,
    counters: SessionCounters,
    phase: Phase,
}

impl Session {
    /// Build a session. Call [`begin`](Self::begin) to open the first image.
    pub fn new(config: SessionConfig, images: Vec<PathBuf>, output: OutputSession) -> Self {
        let counters = SessionCounters::new(&config.label_names());
        Self {
            config,
            output,
            images,
            next: 0,
            current: None,
            counters,
            phase: Phase::Advancing,
        }
    }

    /// Open the first readable image, or finish immediately if there is none.
    pub fn begin(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        if self.phase == Phase::Advancing && self.current.is_none() {
            self.advance(&mut notices);
        }
        notices
    }

    /// One polling tick: apply at most one input event.
    pub fn step(&mut self, event: Option<InputEvent>) -> Vec<Notice> {
        let mut notices = Vec::new();
        if self.phase != Phase::Viewing {
            return notices;
        }
        let Some(event) = event else {
            return notices;
        };

        match event {
            InputEvent::Key(key) => match self.config.command_for(key) {
                Some(Command::Arm(label)) => {
                    if let Some(ctx) = self.current.as_mut() {
                        tracing::info!("Current label: {label}");
                        ctx.arm(label.clone());
                        notices.push(Notice::LabelArmed(label));
                    }
                }
                Some(Command::Save) => {
                    self.export_current(false, &mut notices);
                    self.advance(&mut notices);
                }
                Some(Command::Skip) => {
                    tracing::info!("Skipped image");
                    notices.push(Notice::Skipped);
                    self.advance(&mut notices);
                }
                Some(Command::Exit) => self.terminate_into(&mut notices),
                None => tracing::trace!("Unbound key {key:?}"),
            },
            InputEvent::Click(point) => {
                if let Some(outcome) = self.current.as_mut().and_then(|ctx| ctx.click(point)) {
                    tracing::info!("{outcome}");
                    notices.push(Notice::Click(outcome));
                }
            }
        }

        notices
    }

    /// Export the open image and end the run. Used by the exit key and when
    /// the window is closed. No-op once the session is over.
    pub fn terminate(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        self.terminate_into(&mut notices);
        notices
    }

    fn terminate_into(&mut self, notices: &mut Vec<Notice>) {
        if self.phase.is_terminal() {
            return;
        }
        self.export_current(true, notices);
        self.current = None;
        self.phase = Phase::Terminating;
        tracing::info!("Exited. Crops saved to {}", self.output.root().display());
        notices.push(Notice::Terminated {
            counters: self.counters.clone(),
        });
    }

    fn export_current(&mut self, before_exit: bool, notices: &mut Vec<Notice>) {
        let Some(ctx) = self.current.as_ref() else {
            return;
        };
        // Transient: the caller moves on to Advancing or Terminating before
        // returning.
        self.phase = Phase::Exporting;

        let report = export_selections(
            &ctx.image,
            &ctx.geometry,
            &ctx.selection,
            self.output.root(),
            &ctx.base_name,
            &mut self.counters,
        );
        for failure in report.failures {
            notices.push(Notice::ExportFailed {
                path: failure.path,
                reason: failure.error.to_string(),
            });
        }
        tracing::info!("Saved {} crops from {}", report.written, ctx.file_name);
        notices.push(Notice::Saved {
            written: report.written,
            before_exit,
        });
    }

    /// Drop the current image and open the next readable one. Unreadable
    /// files are reported and skipped.
    fn advance(&mut self, notices: &mut Vec<Notice>) {
        self.phase = Phase::Advancing;
        self.current = None;

        while self.next < self.images.len() {
            let ordinal = self.next;
            self.next += 1;
            let path = &self.images[ordinal];

            match load_image(path) {
                Ok(image) => {
                    let ctx =
                        ImageContext::new(path, ordinal, self.images.len(), image, &self.config);
                    tracing::info!(
                        "Viewing: {} ({}x{}, scale {:.3})",
                        ctx.file_name,
                        ctx.image.width(),
                        ctx.image.height(),
                        ctx.scale.factor()
                    );
                    notices.push(Notice::ImageOpened {
                        file: ctx.file_name.clone(),
                        ordinal,
                        total: ctx.total,
                    });
                    self.current = Some(ctx);
                    self.phase = Phase::Viewing;
                    return;
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable image {}: {e}", path.display());
                    notices.push(Notice::ImageUnreadable {
                        file: file_name(path),
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.phase = Phase::Done;
        tracing::info!("All images processed");
        notices.push(Notice::Finished {
            counters: self.counters.clone(),
        });
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn current(&self) -> Option<&ImageContext> {
        self.current.as_ref()
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn output(&self) -> &OutputSession {
        &self.output
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}
