use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    board::{Board, Piece},
    HEIGHT, WIDTH,
};

pub fn name(piece: Piece) -> &'static str {
    match piece {
        Piece::A => "Red",
        Piece::B => "Yellow",
        Piece::Empty => "Nobody",
    }
}

pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let piece = board.get(row, column)?;
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match piece {
                        Piece::A => Color::Red,
                        Piece::B => Color::Yellow,
                        Piece::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Reads one line from stdin, `None` once input is closed
pub fn read_line() -> Result<Option<String>> {
    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Repeats `question` until it is answered with y or n
pub fn ask(question: &str) -> Result<bool> {
    loop {
        print!("{}", question);
        stdout().flush()?;

        let answer = match read_line()? {
            Some(answer) => answer,
            None => return Ok(false),
        };
        match answer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
