use crate::board::{Board, Rgb};
use crate::game::{Game, InputSink};
use crate::location::Location;
use iced::widget::canvas::{self, Cache, Canvas, Geometry};
use iced::{keyboard, mouse, window, Element, Length, Point, Rectangle, Renderer, Size, Subscription, Task, Theme};
use log::{info, warn};

#[derive(Debug, Clone)]
pub enum Message {
    Click(Point),
    NewGame,
    Monitor(window::Id, Option<Size>),
}

/// The application state iced drives: one game and the cached cell grid.
pub struct Window {
    game: Game,
    grid: Cache,
}

pub fn run(game: Game, fixed: bool) -> iced::Result {
    let size = game.board().size() as f32;
    iced::application("Chess", Window::update, Window::view)
        .subscription(Window::subscription)
        .resizable(false)
        .window_size(Size::new(size, size))
        .run_with(move || Window::new(game, fixed))
}

impl Window {
    /// Unless the size is fixed, asks for the monitor size so the board can be fitted to it.
    pub fn new(game: Game, fixed: bool) -> (Self, Task<Message>) {
        let task = if fixed {
            Task::none()
        } else {
            window::get_oldest()
                .and_then(|id| window::monitor_size(id).map(move |size| Message::Monitor(id, size)))
        };
        (Self { game, grid: Cache::new() }, task)
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Click(point) => {
                self.game.on_click(point.x as i32, point.y as i32);
                Task::none()
            }
            Message::NewGame => {
                self.game.on_reset();
                Task::none()
            }
            Message::Monitor(id, Some(screen)) => {
                let board = Board::fit_screen(screen.width as u32, screen.height as u32);
                info!("monitor is {}x{}, fitting board to {} pixels", screen.width, screen.height, board.size());
                self.game.resize(board);
                self.grid.clear();
                let size = board.size() as f32;
                window::resize(id, Size::new(size, size))
            }
            Message::Monitor(_, None) => {
                warn!("monitor size unavailable, keeping {} pixels", self.game.board().size());
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(self).width(Length::Fill).height(Length::Fill).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(reset_key)
    }
}

fn reset_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Enter) => Some(Message::NewGame),
        _ => None,
    }
}

fn fill(Rgb(r, g, b): Rgb) -> iced::Color {
    iced::Color::from_rgb8(r, g, b)
}

impl canvas::Program<Message> for Window {
    type State = ();

    fn update(
        &self,
        _state: &mut (),
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event
            && let Some(point) = cursor.position_in(bounds)
        {
            return (canvas::event::Status::Captured, Some(Message::Click(point)));
        }
        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let board = *self.game.board();
        let cell = board.cell_size() as f32;

        let grid = self.grid.draw(renderer, bounds.size(), |frame| {
            for location in Location::iter_board() {
                let (x, y) = board.origin(location);
                frame.fill_rectangle(
                    Point::new(x as f32, y as f32),
                    Size::new(cell, cell),
                    fill(Board::fill(location)),
                );
            }
        });

        let mut frame = canvas::Frame::new(renderer, bounds.size());
        for piece in self.game.pieces() {
            let sprite = piece.sprite();
            let bounds = Rectangle::new(Point::new(sprite.x as f32, sprite.y as f32), Size::new(cell, cell));
            frame.draw_image(bounds, canvas::Image::new(sprite.handle.clone()));
        }

        vec![grid, frame.into_geometry()]
    }
}
