use std::path::PathBuf;

use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ServeOptions
{
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    /// search horizon in plies
    pub depth: u8,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(long)]
    /// seed for randomized strategies
    pub seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Strategy::Negamax)]
    /// strategy served to callers
    pub strategy: Strategy,

    #[arg(long)]
    /// JSON transposition table to preload
    pub table_file: Option<PathBuf>,
}

/// A line-oriented shell exposing one agent over stdin/stdout.
///
/// This is the whole outward surface of the crate: a remote-procedure
/// transport or a game runner drives these commands and nothing else.
pub struct Server
{
    options: ServeOptions,
    agent:   Box<dyn Agent>,
    board:   Option<Board>,
    to_move: Player,
    step:    u32,
}

impl Server
{
    /// Creates a new server with the given capabilities.
    pub fn new(options: ServeOptions) -> Result<Server>
    {
        let agent = options.strategy.build(options.depth, options.seed, options.table_file.as_deref())?;

        Ok(Server {
            options,
            agent,
            board: None,
            to_move: Player::Positive,
            step: 1,
        })
    }

    /// Runs the command loop until the caller exits or the stream closes.
    pub fn run(&mut self) -> Result<()>
    {
        loop
        {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0
            {
                return Ok(());
            }

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let cmd = *args.first().unwrap_or(&"");

            if matches!(cmd, "exit" | "quit")
            {
                return Ok(());
            }

            self.apply(cmd, &args[1..])?;
        }
    }
}

impl Server
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()>
    {
        let result = match cmd
        {
            | "" => Ok(()),
            | "actions" => self.actions(),
            | "bestmove" => self.best_move(args),
            | "board" => self.show_board(),
            | "finished" => self.finished(),
            | "newgame" => self.new_game(args),
            | "play" => self.play_move(args),
            | "score" => self.show_score(),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        };

        match result
        {
            | Ok(_) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            }
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    let _ = self.err(&err);
                    Err(err)
                }
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    self.err(&err)
                }
            },
        }
    }

    /// Lists every legal action in the current position.
    fn actions(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        let actions = board.legal_actions().map(|action| action.to_string()).collect::<Vec<_>>().join("; ");

        println!("{}", actions);
        Ok(())
    }

    /// Asks the agent for the best action available to the side to move.
    fn best_move(&mut self, args: &[&str]) -> Result<()>
    {
        let time_left = if args.is_empty()
        {
            None
        }
        else
        {
            match SearchArgs::parse(args)?
            {
                | SearchArgs::Time(duration) => Some(duration),
                | SearchArgs::Depth(depth) =>
                {
                    // A depth override replaces the serving agent.
                    if depth != self.options.depth
                    {
                        self.options.depth = depth;
                        self.agent = self.options.strategy.build(depth, self.options.seed, self.options.table_file.as_deref())?;
                    }
                    None
                }
            }
        };

        let percepts = self.ensure_started()?.percepts(false);
        let (player, step) = (self.to_move, self.step);
        let action = self.agent.play(&percepts, player, step, time_left)?;

        println!("{}", action);
        Ok(())
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started(&self) -> Result<&Board>
    {
        match self.board.as_ref()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started_mut(&mut self) -> Result<&mut Board>
    {
        match self.board.as_mut()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Prints an error to the command stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Reports whether any move remains for either side.
    fn finished(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        println!("{}", board.is_finished());
        Ok(())
    }

    /// Starts a game from the standard layout, or from a percepts file.
    fn new_game(&mut self, args: &[&str]) -> Result<()>
    {
        let board = if args.is_empty()
        {
            Board::standard()
        }
        else
        {
            let percepts = percepts::load(args[0])?;
            Board::new(&percepts, board::consts::MAX_HEIGHT, false)?
        };

        self.agent.initialize(&board.percepts(false), &[Player::Positive, Player::Negative], None);

        self.board = Some(board);
        self.to_move = Player::Positive;
        self.step = 1;

        println!("{}", self.ensure_started()?);
        Ok(())
    }

    /// Prints the ok footer to the command stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }

    /// Plays the given action on the current board, if one exists.
    fn play_move(&mut self, args: &[&str]) -> Result<()>
    {
        let action = Action::parse(args)?;

        let board = self.ensure_started_mut()?;
        board.apply_action(&action)?;

        self.to_move = self.to_move.flip();
        self.step += 1;

        println!("{}", self.ensure_started()?);
        Ok(())
    }

    /// Prints the current board.
    fn show_board(&self) -> Result<()>
    {
        println!("{}", self.ensure_started()?);
        Ok(())
    }

    /// Prints the current score.
    fn show_score(&self) -> Result<()>
    {
        println!("{}", self.ensure_started()?.score());
        Ok(())
    }
}
