//! Snake, drawn on any embedded-graphics target
//!
//! The board is the 130 x 129 grid of the ILI9163 with a wall band around it. The snake
//! moves in 4 pixel steps, every segment is a 5 x 5 outlined square so neighbours share
//! an edge. Only changed cells are redrawn each tick, which suits the direct surface:
//! no flush needed, and the bus only carries the segments that moved.
//!
//! The screen is expected to be cleared to white before [`Game::draw`].

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
};
use heapless::Deque;

pub mod types;
pub use types::*;

/// The snake wins when it is this long
pub const MAX_LENGTH: usize = 100;

/// Distance the head moves per tick
const STEP: i32 = 4;
/// Segment square spans STEP + 1 pixels
const SEGMENT_SIZE: u32 = STEP as u32 + 1;

/// Head positions are clamped to this band, touching either end is fatal
const HEAD_MIN: i32 = 12;
const HEAD_MAX: i32 = 117;

const SNAKE_START: Point = Point::new(50, 63);
const FOOD_START: Point = Point::new(100, 63);
const FOOD_RADIUS: i32 = 3;
/// Food centres are kept this far inside the board
const FOOD_MIN: i32 = 18;
const FOOD_MAX: i32 = 111;
const FOOD_RANGE: u32 = 121;

const BACKGROUND: Rgb888 = Rgb888::WHITE;
const INK: Rgb888 = Rgb888::BLACK;
const FOOD_COLOR: Rgb888 = Rgb888::RED;

/// A rectangular obstacle, filled or drawn as its four edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    area: Rectangle,
    edges: [Line; 4],
    filled: bool,
}

impl Wall {
    /// Solid wall between two inclusive corners
    pub fn filled(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left, bottom_right, true)
    }

    /// Wall drawn as an outline between two inclusive corners
    pub fn outline(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left, bottom_right, false)
    }

    fn new(top_left: Point, bottom_right: Point, filled: bool) -> Self {
        let top_right = Point::new(bottom_right.x, top_left.y);
        let bottom_left = Point::new(top_left.x, bottom_right.y);
        Wall {
            area: Rectangle::with_corners(top_left, bottom_right),
            edges: [
                Line::new(top_left, top_right),
                Line::new(top_left, bottom_left),
                Line::new(top_right, bottom_right),
                Line::new(bottom_left, bottom_right),
            ],
            filled,
        }
    }

    /// The area the wall covers
    pub fn area(&self) -> Rectangle {
        self.area
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if self.filled {
            self.area
                .into_styled(PrimitiveStyle::with_fill(INK))
                .draw(target)
        } else {
            for edge in &self.edges {
                edge.into_styled(PrimitiveStyle::with_stroke(INK, 1))
                    .draw(target)?;
            }
            Ok(())
        }
    }
}

/// The four bands around the board, top and bottom solid, the sides outlined
pub fn board_walls() -> [Wall; 4] {
    [
        Wall::filled(Point::new(0, 0), Point::new(129, 8)),
        Wall::outline(Point::new(121, 0), Point::new(129, 129)),
        Wall::filled(Point::new(0, 121), Point::new(129, 129)),
        Wall::outline(Point::new(0, 0), Point::new(8, 129)),
    ]
}

fn segment(top_left: Point) -> Rectangle {
    Rectangle::new(top_left, Size::new(SEGMENT_SIZE, SEGMENT_SIZE))
}

fn draw_segment<D>(target: &mut D, top_left: Point, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    segment(top_left)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(target)
}

/// The player
#[derive(Debug, Clone)]
pub struct Snake {
    head: Point,
    /// Earlier head positions, oldest first
    body: Deque<Point, MAX_LENGTH>,
    length: usize,
    direction: Direction,
    /// Direction of the last step taken, turns are checked against this one
    moved: Direction,
}

impl Snake {
    /// A snake of length zero heading right
    pub fn new(head: Point) -> Self {
        Snake {
            head,
            body: Deque::new(),
            length: 0,
            direction: Direction::Right,
            moved: Direction::Right,
        }
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of body segments behind the head
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Change direction, reversing into the body is ignored
    pub fn turn(&mut self, direction: Direction) {
        if direction != self.moved.opposite() {
            self.direction = direction;
        }
    }

    /// One more segment, added on the next step
    pub fn grow(&mut self) {
        if self.length < MAX_LENGTH {
            self.length += 1;
        }
    }

    pub fn has_won(&self) -> bool {
        self.length == MAX_LENGTH
    }

    /// Head on the wall band or on its own body
    pub fn is_dead(&self) -> bool {
        let Point { x, y } = self.head;
        x <= HEAD_MIN
            || x >= HEAD_MAX
            || y <= HEAD_MIN
            || y >= HEAD_MAX
            || self.body.iter().any(|&p| p == self.head)
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        for &part in self.body.iter() {
            draw_segment(target, part, INK)?;
        }
        draw_segment(target, self.head, INK)
    }

    /// Move one step and redraw what changed: the vacated tail and the new head
    pub fn step<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let vacated = if self.length == 0 {
            Some(self.head)
        } else {
            let tail = if self.body.len() >= self.length {
                self.body.pop_front()
            } else {
                None
            };
            if self.body.push_back(self.head).is_err() {
                log::warn!("Snake body is full at {} segments", self.body.len());
            }
            tail
        };

        if let Some(tail) = vacated {
            draw_segment(target, tail, BACKGROUND)?;
            // the erased square shared an edge with the new last segment
            if let Some(&last) = self.body.front() {
                draw_segment(target, last, INK)?;
            }
        }

        let delta = self.direction.delta() * STEP;
        let next = self.head + delta;
        self.head = Point::new(
            next.x.clamp(HEAD_MIN, HEAD_MAX),
            next.y.clamp(HEAD_MIN, HEAD_MAX),
        );
        self.moved = self.direction;

        draw_segment(target, self.head, INK)
    }
}

/// Something to eat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    center: Point,
}

impl Food {
    pub fn new(center: Point) -> Self {
        Food { center }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// The area the snake head has to enter
    pub fn bounding_box(&self) -> Rectangle {
        Rectangle::with_center(self.center, Size::new_equal(2 * FOOD_RADIUS as u32 + 1))
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.paint(target, FOOD_COLOR)
    }

    /// Erase, pick a new spot and draw again
    pub fn respawn<D>(&mut self, target: &mut D, rng: &mut XorShift) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.paint(target, BACKGROUND)?;
        let mut coordinate = || (rng.next_u32() % FOOD_RANGE) as i32;
        let x = coordinate().clamp(FOOD_MIN, FOOD_MAX);
        let y = coordinate().clamp(FOOD_MIN, FOOD_MAX);
        self.center = Point::new(x, y);
        log::debug!("Food moved to ({}, {})", x, y);
        self.paint(target, FOOD_COLOR)
    }

    fn paint<D>(&self, target: &mut D, color: Rgb888) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        Circle::with_center(self.center, 2 * FOOD_RADIUS as u32 + 1)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(target)
    }
}

/// Board, snake and food
pub struct Game {
    walls: [Wall; 4],
    snake: Snake,
    food: Food,
    rng: XorShift,
}

impl Game {
    /// A fresh game, `seed` drives food placement
    pub fn new(seed: u32) -> Self {
        Game {
            walls: board_walls(),
            snake: Snake::new(SNAKE_START),
            food: Food::new(FOOD_START),
            rng: XorShift::new(seed),
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Draw the whole scene once, later ticks only draw changes
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        for wall in &self.walls {
            wall.draw(target)?;
        }
        self.snake.draw(target)?;
        self.food.draw(target)
    }

    /// Advance one tick, optionally turning first
    pub fn step<D>(&mut self, target: &mut D, turn: Option<Direction>) -> Result<Outcome, D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if let Some(direction) = turn {
            self.snake.turn(direction);
        }
        self.snake.step(target)?;

        if self.food.bounding_box().contains(self.snake.head()) {
            self.snake.grow();
            log::info!("Snake ate, length {}", self.snake.len());
            self.food.respawn(target, &mut self.rng)?;
        }

        if self.snake.has_won() {
            Ok(Outcome::Won)
        } else if self.snake.is_dead() {
            Ok(Outcome::Lost)
        } else {
            Ok(Outcome::Running)
        }
    }
}
