use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::Rect,
};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::{
    action::Action,
    cli::Cli,
    components::{nav_bar::NavBar, Component},
    config::Config,
    pages::{HomePage, OrderPage, Page},
    state::{InputMode, State},
    tui::{Event, EventResponse, Frame, Tui},
};

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub pages: Vec<Box<dyn Page>>,
    pub active_page: usize,
    pub nav_bar: NavBar,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub state: State,
}

impl App {
    pub fn new(args: Cli) -> Result<Self> {
        let mut config = Config::new()?;
        if let Some(endpoint) = args.endpoint {
            config.config.order_endpoint = endpoint;
        }
        let state = State::new()?;

        Ok(Self {
            config,
            tick_rate: args.tick_rate,
            frame_rate: args.frame_rate,
            pages: vec![Box::new(HomePage::new()), Box::new(OrderPage::new())],
            active_page: 0,
            nav_bar: NavBar::new(vec!["Home", "Order"]),
            should_quit: false,
            should_suspend: false,
            state,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for page in self.pages.iter_mut() {
            page.register_action_handler(action_tx.clone())?;
        }

        for page in self.pages.iter_mut() {
            page.register_config_handler(self.config.clone())?;
        }

        for page in self.pages.iter_mut() {
            page.init(&self.state)?;
        }

        loop {
            if let Some(e) = tui.next().await {
                let stop_event_propagation = self
                    .pages
                    .get_mut(self.active_page)
                    .and_then(|page| page.handle_events(Some(e.clone()), &mut self.state).ok())
                    .map(|response| match response {
                        Some(EventResponse::Continue(action)) => {
                            action_tx.send(action).ok();
                            false
                        }
                        Some(EventResponse::Stop(action)) => {
                            action_tx.send(action).ok();
                            true
                        }
                        _ => false,
                    })
                    .unwrap_or(false);

                if !stop_event_propagation {
                    match e {
                        Event::Quit => action_tx.send(Action::Quit)?,
                        Event::Tick => action_tx.send(Action::Tick)?,
                        Event::Render => action_tx.send(Action::Render)?,
                        Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                        Event::Key(key) if self.state.input_mode == InputMode::Normal => {
                            match key.code {
                                KeyCode::Char('q') => action_tx.send(Action::Quit)?,
                                KeyCode::Char('h') => action_tx.send(Action::Navigate(0))?,
                                KeyCode::Char('o') => action_tx.send(Action::Navigate(1))?,
                                KeyCode::Char('z')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    action_tx.send(Action::Suspend)?
                                }
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    debug!("{action:?}");
                }
                match action {
                    Action::Tick => {}
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Error(ref message) => error!("{message}"),
                    Action::Navigate(index) => {
                        if index < self.pages.len() && index != self.active_page {
                            if let Some(page) = self.pages.get_mut(self.active_page) {
                                page.on_exit(&mut self.state)?;
                            }
                            self.active_page = index;
                            if let Some(page) = self.pages.get_mut(self.active_page) {
                                page.on_enter(&mut self.state)?;
                            }
                        }
                    }
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                                    .unwrap();
                            })
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                                    .unwrap();
                            })
                        })?;
                    }
                    _ => {}
                }

                if let Some(page) = self.pages.get_mut(self.active_page) {
                    if let Some(follow_up) = page.update(action.clone(), &mut self.state)? {
                        action_tx.send(follow_up)?
                    };
                }

                if let Some(follow_up) = self.nav_bar.update(action.clone(), &mut self.state)? {
                    action_tx.send(follow_up)?
                };
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let vertical_layout =
            Layout::vertical(vec![self.nav_bar.height_constraint(), Constraint::Fill(1)])
                .split(frame.area());

        self.nav_bar.draw(frame, vertical_layout[0], &self.state)?;

        if let Some(page) = self.pages.get_mut(self.active_page) {
            page.draw(frame, vertical_layout[1], &self.state)?;
        };

        Ok(())
    }
}
