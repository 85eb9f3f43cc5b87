use anyhow::Context;
use iced::{
    widget::{column, container, row, text, Space},
    Alignment, Background, Border, Color, Element, Length, Sandbox, Settings, Theme,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vslider::{vertical_slider, Parts};

#[derive(Debug, Clone)]
enum DemoMessage {
    Volume(f32),
    Balance(f32),
    Released,
}

struct Demo {
    volume: f32,
    balance: f32,
}

impl Sandbox for Demo {
    type Message = DemoMessage;

    fn new() -> Self {
        Self {
            volume: 50.0,
            balance: 0.0,
        }
    }

    fn title(&self) -> String {
        String::from("vslider demo")
    }

    fn update(&mut self, message: DemoMessage) {
        match message {
            DemoMessage::Volume(volume) => self.volume = volume,
            DemoMessage::Balance(balance) => self.balance = balance,
            DemoMessage::Released => {
                debug!(volume = self.volume, balance = self.balance, "drag released");
            }
        }
    }

    fn view(&self) -> Element<'_, DemoMessage> {
        let volume = vertical_slider(
            0.0..=100.0,
            self.volume,
            DemoMessage::Volume,
            Parts::new(
                region(Color::from_rgb8(0x4c, 0x8b, 0xf5), 4.0),
                region(Color::from_rgb8(0x3a, 0x3a, 0x3a), 4.0),
                region(Color::WHITE, 8.0),
            ),
        )
        .knob_extent(16.0)
        .width(24.0)
        .height(300.0)
        .on_release(DemoMessage::Released);

        // knob defaults to a square as wide as the track
        let balance = vertical_slider(
            -1.0..=1.0,
            self.balance,
            DemoMessage::Balance,
            Parts::new(
                region(Color::from_rgb8(0xe0, 0x7a, 0x2f), 0.0),
                region(Color::from_rgb8(0x3a, 0x3a, 0x3a), 0.0),
                region(Color::from_rgb8(0xf0, 0xf0, 0xf0), 2.0),
            ),
        )
        .width(32.0)
        .height(300.0)
        .on_release(DemoMessage::Released);

        let labels = column![
            text(format!("volume: {:.1}", self.volume)),
            text(format!("balance: {:.2}", self.balance)),
        ]
        .spacing(8.0);

        container(
            row![volume, balance, labels]
                .spacing(32.0)
                .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn region(color: Color, radius: f32) -> Element<'static, DemoMessage> {
    container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Appearance {
            background: Some(Background::Color(color)),
            border: Border::with_radius(radius),
            ..Default::default()
        })
        .into()
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();

    Demo::run(Settings::default()).context("failed to run the slider demo")
}
