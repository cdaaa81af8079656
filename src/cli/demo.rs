use prd::{Manager, Status};

use super::stats::output_table;

pub struct Demo;

impl Demo {
    pub fn run(mut manager: Manager) {
        println!("PRD statistics");
        println!();
        output_table(&manager.statistics());

        println!();
        println!("Searching for 'login' related PRDs:");
        for record in manager.search("login") {
            println!("  - {} ({})", record.title(), record.status());
        }

        if let Some(id) = manager.records().first().map(|record| record.id().to_string()) {
            if manager.update_status(&id, Status::InReview) {
                println!();
                println!("{id} status updated to: {}", Status::InReview);
            }
        }

        println!();
        println!("PRD management system initialized successfully!");
    }
}
