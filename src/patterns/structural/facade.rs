//! One call that drives several home-theater subsystems in the right order.

#[derive(Debug, Default)]
pub struct Amplifier {
    volume: u8,
}

impl Amplifier {
    pub fn on(&self) -> String {
        "Amplifier on".to_string()
    }

    pub fn set_volume(&mut self, volume: u8) -> String {
        self.volume = volume;
        format!("Amplifier volume set to {volume}")
    }

    pub fn off(&self) -> String {
        "Amplifier off".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Projector;

impl Projector {
    pub fn on(&self) -> String {
        "Projector on".to_string()
    }

    pub fn wide_screen_mode(&self) -> String {
        "Projector in widescreen mode".to_string()
    }

    pub fn off(&self) -> String {
        "Projector off".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Player {
    playing: Option<String>,
}

impl Player {
    pub fn play(&mut self, movie: &str) -> String {
        self.playing = Some(movie.to_string());
        format!("Playing \"{movie}\"")
    }

    pub fn stop(&mut self) -> String {
        match self.playing.take() {
            Some(movie) => format!("Stopped \"{movie}\""),
            None => "Nothing to stop".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Lights;

impl Lights {
    pub fn dim(&self, level: u8) -> String {
        format!("Lights dimmed to {level}%")
    }

    pub fn on(&self) -> String {
        "Lights on".to_string()
    }
}

#[derive(Debug, Default)]
pub struct HomeTheater {
    amplifier: Amplifier,
    projector: Projector,
    player: Player,
    lights: Lights,
}

impl HomeTheater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch_movie(&mut self, movie: &str) -> Vec<String> {
        vec![
            self.lights.dim(10),
            self.projector.on(),
            self.projector.wide_screen_mode(),
            self.amplifier.on(),
            self.amplifier.set_volume(5),
            self.player.play(movie),
        ]
    }

    pub fn end_movie(&mut self) -> Vec<String> {
        vec![
            self.player.stop(),
            self.amplifier.off(),
            self.projector.off(),
            self.lights.on(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_sequences_subsystems() {
        let mut theater = HomeTheater::new();
        let start = theater.watch_movie("Alien");
        assert_eq!(start.first().map(String::as_str), Some("Lights dimmed to 10%"));
        assert_eq!(start.last().map(String::as_str), Some("Playing \"Alien\""));

        let end = theater.end_movie();
        assert_eq!(end, ["Stopped \"Alien\"", "Amplifier off", "Projector off", "Lights on"]);
        assert_eq!(theater.end_movie()[0], "Nothing to stop");
    }
}
