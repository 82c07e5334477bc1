//! Playback sessions.
//!
//! An [`AudioSession`] owns the output device for the lifetime of the
//! application and enforces one active playback at a time: starting a new
//! playback silences the previous one (last wins). Each playback is
//! represented by a [`PlaybackToken`] that can be awaited.

use std::time::Duration;

use symph_spec::model::clamp_unit;
use tokio::sync::watch;

use crate::device::{AudioDevice, PlaybackId};
use crate::error::AudioResult;
use crate::schedule::Schedule;

/// Default master gain (volume) of a new session.
pub const DEFAULT_MASTER_GAIN: f64 = 0.5;

/// How a playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The schedule ran to its end.
    Completed,
    /// The playback was stopped or replaced before its end.
    Cancelled,
}

/// Handle to one playback.
#[derive(Debug, Clone)]
pub struct PlaybackToken {
    id: PlaybackId,
    duration: f64,
    active: watch::Receiver<Option<PlaybackId>>,
}

impl PlaybackToken {
    /// Device-level identifier of the playback.
    pub fn id(&self) -> PlaybackId {
        self.id
    }

    /// Scheduled length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns true once another playback replaced this one or it was stopped.
    pub fn is_cancelled(&self) -> bool {
        *self.active.borrow() != Some(self.id)
    }

    /// Waits until the playback completes or is cancelled.
    pub async fn wait(mut self) -> PlaybackOutcome {
        if self.is_cancelled() {
            return PlaybackOutcome::Cancelled;
        }

        let length = Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::ZERO);
        let timer = tokio::time::sleep(length);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                _ = &mut timer => return PlaybackOutcome::Completed,
                changed = self.active.changed() => {
                    if self.is_cancelled() {
                        return PlaybackOutcome::Cancelled;
                    }
                    if changed.is_err() {
                        // Session gone without stopping us; let the timer finish.
                        (&mut timer).await;
                        return PlaybackOutcome::Completed;
                    }
                }
            }
        }
    }
}

/// Owner of the audio device and the single active playback.
#[derive(Debug)]
pub struct AudioSession<D: AudioDevice> {
    device: D,
    master_gain: f64,
    next_id: PlaybackId,
    active: watch::Sender<Option<PlaybackId>>,
}

impl<D: AudioDevice> AudioSession<D> {
    /// Opens a session on a device.
    pub fn new(device: D) -> Self {
        let (active, _) = watch::channel(None);
        Self {
            device,
            master_gain: DEFAULT_MASTER_GAIN,
            next_id: 1,
            active,
        }
    }

    /// Returns the device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Returns the device mutably (for example to advance an offline clock).
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Current master gain in [0, 1].
    pub fn master_gain(&self) -> f64 {
        self.master_gain
    }

    /// Sets the master gain for subsequent playbacks, clamped to [0, 1].
    pub fn set_master_gain(&mut self, gain: f64) {
        self.master_gain = clamp_unit(gain);
    }

    /// Identifier of the playback currently considered active.
    pub fn active(&self) -> Option<PlaybackId> {
        *self.active.borrow()
    }

    /// Starts a playback, silencing any active one first.
    ///
    /// # Errors
    /// Returns an error if the schedule contains unplayable values; the
    /// active playback is left untouched in that case.
    pub fn play(&mut self, schedule: &Schedule) -> AudioResult<PlaybackToken> {
        let mut scheduled = schedule.clone();
        scheduled.master_gain = clamp_unit(schedule.master_gain * self.master_gain);
        scheduled.validate()?;

        let now = self.device.now();
        if let Some(previous) = self.active.send_replace(None) {
            log::debug!("playback {} replaced", previous);
            self.device.silence(previous, now);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.device.schedule(id, now, &scheduled)?;
        self.active.send_replace(Some(id));

        Ok(PlaybackToken {
            id,
            duration: scheduled.duration(),
            active: self.active.subscribe(),
        })
    }

    /// Silences the active playback. Returns false if nothing was playing.
    pub fn stop(&mut self) -> bool {
        match self.active.send_replace(None) {
            Some(id) => {
                let now = self.device.now();
                self.device.silence(id, now);
                true
            }
            None => false,
        }
    }

    /// Hands the device back. Scheduled playbacks keep their natural end;
    /// call [`AudioSession::stop`] first to cut the active one.
    pub fn close(self) -> D {
        self.device
    }
}
