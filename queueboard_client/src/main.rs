use anyhow::Result;
use clap::Parser;
use futures_util::FutureExt;
use queueboard::utils::logging::init_logging;
use queueboard_client::announcer::TerminalAnnouncer;
use queueboard_client::joint_client::QueueClient;
use queueboard_client::mirror::Mirror;
use queueboard_client::shell::{confirmed, ShellCommand, HELP};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Parser, Debug)]
#[command(name = "queueboard-client", version, about = "Terminal view of a queueboard")]
struct Args {
    /// Websocket endpoint of the board
    #[arg(long, env = "QUEUEBOARD_URL", default_value = "ws://127.0.0.1:5000/ws")]
    url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging("queueboard_client", args.verbose)?;

    let mut client = QueueClient::new(Arc::new(TerminalAnnouncer));
    client
        .listener()
        .register_handler(Box::new(|mirror: Mirror| {
            async move {
                println!("\n{}\n", mirror);
                Ok(())
            }
            .boxed()
        }))
        .await;

    client.connect(&args.url).await?;
    let mut listening = client.listen()?;
    tracing::info!("connected to {}", args.url);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => line,
                None => break,
            },
            _ = &mut listening => {
                tracing::warn!("server closed the connection");
                break;
            }
        };

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if command.requires_admin() && !client.mirror().lock().await.is_admin() {
            println!("admin login required");
            continue;
        }

        let sent = match command {
            ShellCommand::Queue(category) => client.enqueue(category).await.map(|ticket| {
                println!(
                    "your ticket: {} ({})",
                    ticket.number,
                    ticket.counter.as_deref().unwrap_or("-")
                );
            }),
            ShellCommand::Login(password) => client.login(&password).await,
            ShellCommand::Logout => {
                client.logout().await;
                Ok(())
            }
            ShellCommand::Next => client.next().await,
            ShellCommand::Remove(number) => client.remove(&number).await,
            ShellCommand::Clear => {
                if confirm(&mut lines).await? {
                    client.clear_all().await
                } else {
                    Ok(())
                }
            }
            ShellCommand::Show => {
                println!("{}", *client.mirror().lock().await);
                Ok(())
            }
            ShellCommand::Help => {
                println!("{}", HELP);
                Ok(())
            }
            ShellCommand::Quit => break,
        };

        if let Err(e) = sent {
            tracing::error!("failed to send command: {}", e);
        }
    }

    listening.abort();
    Ok(())
}

async fn confirm(lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
    println!("Clear the whole queue? [y/N]");
    Ok(lines
        .next_line()
        .await?
        .is_some_and(|answer| confirmed(&answer)))
}
