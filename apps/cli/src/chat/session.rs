//! Terminal chat session — the front end over the conversation controller.
//!
//! One loop iteration per input line: slash commands act on the active
//! record locally; anything else is a syllabus topic submitted through the
//! controller, which drives exactly one completion call.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{error, info};

use crate::chat::controller::{Controller, Submission};
use crate::chat::Originator;
use crate::llm_client::LlmClient;
use crate::syllabus::record::Field;
use crate::syllabus::{export, store};

const HELP: &str = "\
Commandes :
  /show                 afficher le syllabus actif
  /edit <champ> <val>   modifier un champ (ex: /edit ects_credits 5)
  /fields               lister les identifiants de champs
  /save                 enregistrer le syllabus
  /export               exporter le syllabus en HTML
  /help                 afficher cette aide
  /quit                 quitter
Tout autre texte est envoyé comme sujet de syllabus.";

pub struct ChatSession {
    controller: Controller,
    llm: LlmClient,
    save_path: PathBuf,
}

impl ChatSession {
    /// Builds a session, restoring the previously saved record when one
    /// exists at `save_path`.
    pub fn new(llm: LlmClient, save_path: PathBuf) -> Self {
        let controller = match store::load(&save_path) {
            Ok(Some(record)) => {
                info!("Restored saved syllabus from {}", save_path.display());
                Controller::with_record(record)
            }
            Ok(None) => Controller::new(),
            Err(e) => {
                error!("Failed to load saved syllabus: {e:#}");
                Controller::new()
            }
        };
        ChatSession {
            controller,
            llm,
            save_path,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("Assistant Syllabus — demandez un syllabus sur un sujet. /help pour l'aide.");
        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            let input = line.trim();

            if let Some(command) = input.strip_prefix('/') {
                if self.handle_command(command) {
                    break;
                }
                continue;
            }

            let printed = self.controller.transcript().len();
            if let Submission::Request(prompt) = self.controller.submit(input) {
                println!("Génération...");
                let outcome = self.llm.complete(&prompt).await;
                self.controller.resolve(outcome);
            }
            self.print_transcript_from(printed);
        }
        Ok(())
    }

    /// Executes one slash command. Returns true when the session should end.
    fn handle_command(&mut self, command: &str) -> bool {
        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };
        match name {
            "quit" | "q" => return true,
            "help" => println!("{HELP}"),
            "show" => self.show_record(),
            "fields" => {
                for field in Field::ALL {
                    println!("{:<16} {}", field.name(), field.label());
                }
            }
            "edit" => self.edit(rest),
            "save" => match store::save(&self.save_path, self.controller.record()) {
                Ok(()) => println!("Syllabus enregistré dans {}", self.save_path.display()),
                Err(e) => {
                    error!("save failed: {e:#}");
                    println!("Échec de l'enregistrement.");
                }
            },
            "export" => match export::write_html(self.controller.record(), Path::new(".")) {
                Ok(path) => println!("Syllabus exporté vers {}", path.display()),
                Err(e) => {
                    error!("export failed: {e:#}");
                    println!("Échec de l'export.");
                }
            },
            other => println!("Commande inconnue : /{other} (/help pour l'aide)"),
        }
        false
    }

    fn edit(&mut self, args: &str) {
        let Some((name, value)) = args.split_once(char::is_whitespace) else {
            println!("Usage : /edit <champ> <valeur> (/fields pour la liste)");
            return;
        };
        match Field::from_name(name) {
            Some(field) => {
                self.controller.edit_field(field, value);
                println!("{} ← {}", field.label(), self.controller.record().get(field));
            }
            None => println!("Champ inconnu : {name} (/fields pour la liste)"),
        }
    }

    fn show_record(&self) {
        for field in Field::ALL {
            println!("{} : {}", field.label(), self.controller.record().get(field));
        }
    }

    fn print_transcript_from(&self, start: usize) {
        for message in &self.controller.transcript()[start..] {
            match message.originator {
                Originator::User => println!("[vous] {}", message.text),
                Originator::Assistant => println!("[assistant] {}", message.text),
            }
        }
    }
}
