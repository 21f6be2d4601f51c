use crate::database::models::PostRecord;
use crate::timeline::TimelineService;
use crate::utils::{initials, preview};
use crate::validation::{self, MAX_POST_LENGTH};
use anyhow::Result;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Print the home timeline once and return.
pub fn show_timeline(service: &TimelineService) -> Result<()> {
    print_posts(&service.home(), "No posts yet.");
    Ok(())
}

/// Run the interactive CLI for composing, browsing and engaging with posts.
pub async fn run_cli(service: TimelineService) -> Result<()> {
    let user = service.current_user()?;
    let session = CliSession { service };

    println!("Chirp CLI ready. Type 'help' for a list of commands.");
    println!("Signed in as {} (@{})", user.display_name, user.name);

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);

    loop {
        print!("chirp> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = reader.read_line(&mut line).await?;
        if read == 0 {
            println!("Exiting");
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let tokens = match shell_words::split(trimmed) {
            Ok(tokens) if !tokens.is_empty() => tokens,
            Ok(_) => continue,
            Err(err) => {
                println!("Unable to parse command: {err}");
                continue;
            }
        };

        match session.handle_command(&tokens) {
            Ok(LoopAction::Continue) => {}
            Ok(LoopAction::Exit) => break,
            Err(err) => {
                println!("Error: {err:#}");
            }
        }
    }

    Ok(())
}

struct CliSession {
    service: TimelineService,
}

#[derive(Debug, PartialEq, Eq)]
enum LoopAction {
    Continue,
    Exit,
}

impl CliSession {
    fn handle_command(&self, tokens: &[String]) -> Result<LoopAction> {
        let command = tokens[0].as_str();
        match command {
            "help" => {
                self.print_help();
            }
            "timeline" | "home" => {
                print_posts(&self.service.home(), "No posts yet. Use 'post' to write one.");
            }
            "view" | "thread" => {
                let Some(id) = tokens.get(1) else {
                    println!("Usage: view <post_id>");
                    return Ok(LoopAction::Continue);
                };
                self.view_thread(id);
            }
            "post" => {
                if tokens.len() < 2 {
                    println!("Usage: post \"message\"");
                    return Ok(LoopAction::Continue);
                }
                let post = self.service.compose(&tokens[1..].join(" "), None)?;
                println!("Posted {}", post.id);
            }
            "reply" => {
                if tokens.len() < 3 {
                    println!("Usage: reply <post_id> \"message\"");
                    return Ok(LoopAction::Continue);
                }
                let post = self
                    .service
                    .compose(&tokens[2..].join(" "), Some(tokens[1].clone()))?;
                println!("Replied with {}", post.id);
            }
            "like" => {
                let Some(id) = tokens.get(1) else {
                    println!("Usage: like <post_id>");
                    return Ok(LoopAction::Continue);
                };
                match self.service.toggle_like(id)? {
                    Some(true) => println!("Liked {id}"),
                    Some(false) => println!("Removed like from {id}"),
                    None => println!("Post {id} not found"),
                }
            }
            "repost" => {
                let Some(id) = tokens.get(1) else {
                    println!("Usage: repost <post_id>");
                    return Ok(LoopAction::Continue);
                };
                match self.service.toggle_repost(id)? {
                    Some(true) => println!("Reposted {id}"),
                    Some(false) => println!("Undid repost of {id}"),
                    None => println!("Post {id} not found"),
                }
            }
            "delete" => {
                let Some(id) = tokens.get(1) else {
                    println!("Usage: delete <post_id>");
                    return Ok(LoopAction::Continue);
                };
                if self.service.store().posts().get(id).is_none() {
                    println!("Post {id} not found");
                    return Ok(LoopAction::Continue);
                }
                self.service.store().posts().delete(id)?;
                println!("Deleted {id}");
            }
            "profile" | "whoami" => {
                self.print_profile()?;
            }
            "set-name" => {
                if tokens.len() < 2 {
                    println!("Usage: set-name \"display name\"");
                    return Ok(LoopAction::Continue);
                }
                let user = self
                    .service
                    .update_profile(Some(&tokens[1..].join(" ")), None)?;
                println!("Display name is now '{}'", user.display_name);
            }
            "set-bio" => {
                let bio = tokens[1..].join(" ");
                let user = self.service.update_profile(None, Some(&bio))?;
                println!(
                    "Bio updated ({} characters left)",
                    validation::remaining(&user.bio, validation::MAX_BIO_LENGTH)
                );
            }
            "clear" => {
                print!("\x1B[2J\x1B[1;1H");
            }
            "quit" | "exit" => return Ok(LoopAction::Exit),
            other => {
                println!("Unknown command '{other}'. Type 'help' for a list of commands.");
            }
        }
        Ok(LoopAction::Continue)
    }

    fn print_help(&self) {
        println!("Available commands:");
        println!("  help                   Show this help message");
        println!("  timeline               List top-level posts, newest first");
        println!("  view <id>              Show a post and its replies");
        println!("  post MSG               Publish a post (max {MAX_POST_LENGTH} characters)");
        println!("  reply <id> MSG         Reply to a post");
        println!("  like <id>              Like or unlike a post");
        println!("  repost <id>            Repost or undo a repost");
        println!("  delete <id>            Delete a post");
        println!("  profile                Show your profile");
        println!("  set-name NAME          Change your display name");
        println!("  set-bio [BIO]          Change your bio");
        println!("  clear                  Clear the screen");
        println!("  exit                   Quit the CLI");
    }

    fn view_thread(&self, post_id: &str) {
        let Some(thread) = self.service.thread(post_id) else {
            println!("Post {post_id} not found");
            return;
        };
        print_post(&thread.post);
        println!();
        println!("Replies:");
        print_posts(&thread.replies, "  (no replies yet)");
    }

    fn print_profile(&self) -> Result<()> {
        let user = self.service.current_user()?;
        println!("[{}] {}", initials(&user.display_name), user.display_name);
        println!("Handle: @{}", user.name);
        if !user.bio.is_empty() {
            println!("Bio: {}", user.bio);
        }
        println!("Joined: {}", user.created_at);
        Ok(())
    }
}

fn print_posts(posts: &[PostRecord], empty_message: &str) {
    if posts.is_empty() {
        println!("{empty_message}");
        return;
    }
    for post in posts {
        println!(
            "  [{}] {}: {} (likes: {}, reposts: {}, replies: {})",
            post.id,
            post.author_name,
            preview(&post.content, 60),
            post.likes,
            post.reposts,
            post.replies.len()
        );
    }
}

fn print_post(post: &PostRecord) {
    println!("Post {}", post.id);
    println!("Author: [{}] {}", initials(&post.author_name), post.author_name);
    println!("Created: {}", post.created_at);
    if let Some(parent) = &post.reply_to {
        println!("In reply to: {parent}");
    }
    println!("{}", post.content);
    println!(
        "likes: {}  reposts: {}  replies: {}",
        post.likes,
        post.reposts,
        post.replies.len()
    );
}
