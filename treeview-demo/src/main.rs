mod moves;

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::rc::Rc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use treeview::{Node, TreeConfig, TreeController, TreeData};

const SAMPLE: &str = include_str!("../data/sample.json");

const HELP: &str =
    "arrows/enter: navigate  space: activate  d: drag  p: drop  e: drop at end  esc: cancel  q: quit";

/// Raw-mode terminal session, restored on drop.
struct Screen {
    stdout: Stdout,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("treeview-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let data = TreeData::from_json(SAMPLE).map_err(io::Error::other)?;

    let status = Rc::new(RefCell::new(String::from("ready")));
    let pending: Rc<RefCell<Vec<(String, Node)>>> = Rc::default();

    let select_status = status.clone();
    let drag_status = status.clone();
    let drag_pending = pending.clone();
    let mut tree = TreeController::new(data, TreeConfig::new().initial_selected_id("4"))
        .on_select_change(move |node| {
            *select_status.borrow_mut() = match node {
                Some(node) => format!("selected {}", node.name),
                None => "selection cleared".to_string(),
            };
        })
        .on_document_drag(move |source, target| {
            info!("move intent: {} -> {:?}", source.id, target.id);
            *drag_status.borrow_mut() = if target.is_drop_zone() {
                format!("moved {} to the end", source.name)
            } else {
                format!("moved {} into {}", source.name, target.name)
            };
            drag_pending
                .borrow_mut()
                .push((source.id.clone(), target.clone()));
        });

    let mut screen = Screen::new()?;

    loop {
        draw(&mut screen.stdout, &tree, &status.borrow())?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let before = tree.selected_id().map(str::to_string);
        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Esc => {
                if tree.cancel_drag() {
                    *status.borrow_mut() = "drag cancelled".to_string();
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = before.clone() {
                    tree.activate(&id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = before.clone()
                    && !tree.start_drag(&id)
                {
                    *status.borrow_mut() = format!("{} is not draggable", id);
                }
            }
            KeyCode::Char('p') => {
                if let Some(id) = before.clone() {
                    tree.drop(&id);
                }
            }
            KeyCode::Char('e') => {
                tree.drop_on_zone();
            }
            _ => {
                tree.handle_key_event(&key);
            }
        }

        // No pointer in a terminal: the selected row doubles as the hovered one.
        let after = tree.selected_id().map(str::to_string);
        if tree.is_dragging() && before != after {
            if let Some(id) = &before {
                tree.drag_leave(id);
            }
            if let Some(id) = &after {
                tree.drag_over(id);
            }
        }

        let intents: Vec<_> = pending.borrow_mut().drain(..).collect();
        if !intents.is_empty() {
            let mut forest = tree.roots().to_vec();
            for (source, target) in &intents {
                moves::apply_move(&mut forest, source, target);
            }
            tree.set_data(forest);
        }
    }

    Ok(())
}

fn draw(out: &mut Stdout, tree: &TreeController, status: &str) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("Project Tree View"),
        SetAttribute(Attribute::Reset),
    )?;

    let mut y = 2u16;
    for row in tree.visible() {
        let indent = "  ".repeat(row.depth as usize);
        let icon = match (row.is_internal, row.is_expanded) {
            (true, true) => "▼ ",
            (true, false) => "▶ ",
            (false, _) => "  ",
        };
        let mut marks = String::new();
        if tree.dragged().is_some_and(|n| n.id == row.node.id) {
            marks.push_str("  [dragging]");
        }
        if tree.drop_target() == Some(row.id()) {
            marks.push_str("  <- drop here");
        }

        queue!(out, cursor::MoveTo(0, y))?;
        if tree.is_selected(row.id()) {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            out,
            Print(format!("{}{}{}", indent, icon, row.node.name)),
            SetAttribute(Attribute::Reset),
            Print(marks),
        )?;
        y += 1;
    }

    queue!(
        out,
        cursor::MoveTo(0, y + 1),
        Print(if tree.is_dragging() { "(end of tree)" } else { "" }),
        cursor::MoveTo(0, y + 3),
        Print(status),
        cursor::MoveTo(0, y + 4),
        SetAttribute(Attribute::Dim),
        Print(HELP),
        SetAttribute(Attribute::Reset),
    )?;
    out.flush()
}
