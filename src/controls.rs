use miniquad::KeyCode;

/// What the render loop should do with the current iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    Tick,
    Quit,
}

/// Keyboard control of the render loop. `Escape` latches a quit request.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    quit: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, keycode: KeyCode) {
        if keycode == KeyCode::Escape {
            self.quit = true;
        }
    }

    /// Called once at the top of every update.
    pub fn begin_frame(&self) -> FrameAction {
        if self.quit {
            FrameAction::Quit
        } else {
            FrameAction::Tick
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_by_default() {
        let controls = Controls::new();
        assert_eq!(controls.begin_frame(), FrameAction::Tick);
        assert_eq!(controls.begin_frame(), FrameAction::Tick);
    }

    #[test]
    fn escape_quits_on_the_next_frame() {
        let mut controls = Controls::new();
        controls.key_down(KeyCode::Escape);
        assert_eq!(controls.begin_frame(), FrameAction::Quit);
        assert_eq!(controls.begin_frame(), FrameAction::Quit);
    }

    #[test]
    fn quit_is_final() {
        let mut controls = Controls::new();
        controls.key_down(KeyCode::Escape);
        controls.key_down(KeyCode::Space);
        controls.key_down(KeyCode::N);
        assert_eq!(controls.begin_frame(), FrameAction::Quit);
    }

    #[test]
    fn other_keys_keep_ticking() {
        let mut controls = Controls::new();
        for key in [KeyCode::A, KeyCode::Space, KeyCode::N, KeyCode::Enter] {
            controls.key_down(key);
            assert_eq!(controls.begin_frame(), FrameAction::Tick);
        }
    }

    #[test]
    fn every_frame_ticks_until_escape() {
        let mut controls = Controls::new();
        let mut anim = crate::animation::Animation::new(
            glam::Mat4::IDENTITY,
            glam::Mat4::IDENTITY,
            crate::color::ColorOscillator::default(),
        );

        let mut frames = 0;
        for frame in 0..10 {
            if frame == 3 {
                controls.key_down(KeyCode::Space);
            }
            if frame == 6 {
                controls.key_down(KeyCode::Escape);
            }
            match controls.begin_frame() {
                FrameAction::Quit => break,
                FrameAction::Tick => {
                    anim.tick();
                    frames += 1;
                }
            }
        }
        assert_eq!(frames, 6);
        assert_eq!(anim.counter(), 6);
    }
}
