//! Abstract command records handed to the robot dispatcher

use crate::{Intent, MediaConfig, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// What the robot should do for an intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "target", rename_all = "snake_case")]
pub enum Command {
    /// Wave towards one side
    Wave(Side),
    TurnAround,
    Stop,
    Follow,
    /// Play a demonstration video by title
    PlayVideo(String),
    /// Display a picture of an object
    ShowImage(String),
}

impl Command {
    /// Map an intent to a command; `None` when nothing should be dispatched
    pub fn from_intent(intent: &Intent) -> Option<Command> {
        let action = intent.action_name()?;
        match action {
            "move" => match intent.get(Role::Direction) {
                Some("left") => Some(Command::Wave(Side::Left)),
                Some("right") => Some(Command::Wave(Side::Right)),
                other => {
                    tracing::warn!(direction = ?other, "unknown direction");
                    None
                }
            },
            "turn" => Some(Command::TurnAround),
            "stop" => Some(Command::Stop),
            "follow" => Some(Command::Follow),
            "show" => {
                if let Some(title) = intent.get(Role::VideoTitle) {
                    Some(Command::PlayVideo(title.to_string()))
                } else {
                    intent
                        .get(Role::Object)
                        .map(|object| Command::ShowImage(object.to_string()))
                }
            }
            // nothing on the master controller handles conversation
            _ => None,
        }
    }

    /// Line sent to the master controller; media commands are played locally
    pub fn master_message(&self) -> Option<&'static str> {
        match self {
            Command::Wave(Side::Left) => Some("leftWave"),
            Command::Wave(Side::Right) => Some("rightWave"),
            Command::TurnAround => Some("turnAround"),
            Command::Stop => Some("stop"),
            Command::Follow => Some("follow"),
            Command::PlayVideo(_) | Command::ShowImage(_) => None,
        }
    }

    /// Files a media player would probe for this command, in priority order
    pub fn media_candidates(&self, media: &MediaConfig) -> Vec<PathBuf> {
        let (dir, name, extensions) = match self {
            Command::PlayVideo(title) => (&media.video_dir, title, &media.video_extensions),
            Command::ShowImage(object) => (&media.image_dir, object, &media.image_extensions),
            _ => return Vec::new(),
        };
        extensions
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PlayVideo(title) => write!(f, "play video '{title}'"),
            Command::ShowImage(object) => write!(f, "show image '{object}'"),
            other => f.write_str(other.master_message().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObjectDict;

    fn intent(action: &str, roles: &[(Role, &str)]) -> Intent {
        let objects: ObjectDict = roles.iter().map(|(r, w)| (*r, w.to_string())).collect();
        Intent::action(action, objects)
    }

    #[test]
    fn test_move_directions() {
        let left = intent("move", &[(Role::Direction, "left")]);
        assert_eq!(Command::from_intent(&left), Some(Command::Wave(Side::Left)));
        let right = intent("move", &[(Role::Direction, "right")]);
        assert_eq!(
            Command::from_intent(&right).and_then(|c| c.master_message()),
            Some("rightWave")
        );
        let place = intent("move", &[(Role::Place, "kitchen")]);
        assert_eq!(Command::from_intent(&place), None);
    }

    #[test]
    fn test_simple_actions() {
        assert_eq!(Command::from_intent(&intent("turn", &[])), Some(Command::TurnAround));
        assert_eq!(Command::from_intent(&intent("stop", &[])), Some(Command::Stop));
        assert_eq!(
            Command::from_intent(&intent("follow", &[(Role::Person, "me")])),
            Some(Command::Follow)
        );
        assert_eq!(Command::from_intent(&intent("talk", &[(Role::Topic, "cars")])), None);
        assert_eq!(Command::from_intent(&Intent::not_found()), None);
    }

    #[test]
    fn test_show_prefers_video() {
        let show = intent(
            "show",
            &[(Role::Object, "hands"), (Role::VideoTitle, "wash-hands")],
        );
        assert_eq!(
            Command::from_intent(&show),
            Some(Command::PlayVideo("wash-hands".to_string()))
        );
        let picture = intent("show", &[(Role::Object, "cow")]);
        assert_eq!(
            Command::from_intent(&picture),
            Some(Command::ShowImage("cow".to_string()))
        );
        assert_eq!(Command::from_intent(&intent("show", &[(Role::Person, "me")])), None);
    }

    #[test]
    fn test_media_candidates() {
        let media = MediaConfig::default();
        let video = Command::PlayVideo("play-tennis".to_string()).media_candidates(&media);
        assert_eq!(
            video,
            vec![
                PathBuf::from("videos/play-tennis.mov"),
                PathBuf::from("videos/play-tennis.mp4"),
            ]
        );
        let image = Command::ShowImage("cow".to_string()).media_candidates(&media);
        assert_eq!(image.len(), 3);
        assert_eq!(image[2], PathBuf::from("images/cow.gif"));
        assert!(Command::Stop.media_candidates(&media).is_empty());
        assert_eq!(Command::ShowImage("cow".to_string()).master_message(), None);
    }
}
