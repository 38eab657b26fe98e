use std::process::exit;

use index_model::{FileRow, RowField};
use index_service::{IndexService, ServiceConfig};
use index_store::SortDirection;

fn print_usage() {
    eprintln!(
        "Usage:\n\
         index-cli DATABASE.json [--query TERM] [--subject S] [--days N]\n\
         \x20                    [--sort FIELD] [--desc] [--subjects]\n\
         \n\
         FIELD is one of: name, subject, folder_path, date_added\n\
         --subjects lists the distinct subjects instead of printing the table\n"
    );
}

struct CliArgs {
    database: String,
    query: Option<String>,
    subject: Option<String>,
    days: Option<i64>,
    sort: Option<RowField>,
    descending: bool,
    list_subjects: bool,
}

fn parse_args(mut args: Vec<String>) -> Result<CliArgs, String> {
    if args.is_empty() || args[0].starts_with('-') {
        return Err("database path is required".into());
    }
    let database = args.remove(0);

    let mut out = CliArgs {
        database,
        query: None,
        subject: None,
        days: None,
        sort: None,
        descending: false,
        list_subjects: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--query" => {
                if i + 1 < args.len() {
                    out.query = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    return Err("--query requires a term".into());
                }
            }
            "--subject" => {
                if i + 1 < args.len() {
                    out.subject = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    return Err("--subject requires a value".into());
                }
            }
            "--days" => {
                if i + 1 < args.len() {
                    let n = args[i + 1]
                        .parse::<i64>()
                        .map_err(|_| format!("--days expects a number, got `{}`", args[i + 1]))?;
                    out.days = Some(n);
                    i += 2;
                } else {
                    return Err("--days requires a number".into());
                }
            }
            "--sort" => {
                if i + 1 < args.len() {
                    out.sort = Some(args[i + 1].parse::<RowField>()?);
                    i += 2;
                } else {
                    return Err("--sort requires a field".into());
                }
            }
            "--desc" => {
                out.descending = true;
                i += 1;
            }
            "--subjects" => {
                out.list_subjects = true;
                i += 1;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(out)
}

fn print_table(rows: &[FileRow]) {
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }

    let mut widths: Vec<usize> = RowField::ALL.iter().map(|f| f.label().len()).collect();
    for row in rows {
        for (i, field) in RowField::ALL.iter().enumerate() {
            widths[i] = widths[i].max(row.get(*field).chars().count());
        }
    }

    let header: Vec<String> = RowField::ALL
        .iter()
        .zip(&widths)
        .map(|(f, w)| format!("{:<width$}", f.label(), width = *w))
        .collect();
    println!("{}", header.join(" | "));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rule.join("-+-"));

    for row in rows {
        let cells: Vec<String> = RowField::ALL
            .iter()
            .zip(&widths)
            .map(|(f, w)| format!("{:<width$}", row.get(*f), width = *w))
            .collect();
        println!("{}", cells.join(" | "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.is_empty() || raw.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        exit(2);
    }

    let args = match parse_args(raw) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("error: {msg}\n");
            print_usage();
            exit(2);
        }
    };

    let mut svc = IndexService::new(ServiceConfig {
        database_path: args.database.clone().into(),
    });
    if let Err(e) = svc.reload() {
        eprintln!("error: {e}");
        exit(1);
    }

    if args.list_subjects {
        for subject in svc.subjects() {
            println!("{subject}");
        }
        return;
    }

    if let Some(term) = &args.query {
        svc.set_search_term(term.clone());
    }
    if let Some(subject) = &args.subject {
        svc.set_subject(subject.clone());
    }
    svc.set_days(args.days);
    if let Some(field) = args.sort {
        let dir = if args.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        svc.set_sort(Some((field, dir)));
    }

    print_table(&svc.current_view());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        parse_args(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn positional_database_path_is_required() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--query", "x"]).is_err());
        assert_eq!(parse(&["db.json"]).unwrap().database, "db.json");
    }

    #[test]
    fn flags_parse_into_query_parameters() {
        let args = parse(&[
            "db.json", "--query", "math", "--days", "-3", "--sort", "date", "--desc",
        ])
        .unwrap();
        assert_eq!(args.query.as_deref(), Some("math"));
        assert_eq!(args.days, Some(-3));
        assert_eq!(args.sort, Some(RowField::DateAdded));
        assert!(args.descending);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(parse(&["db.json", "--days", "soon"]).is_err());
        assert!(parse(&["db.json", "--sort", "size"]).is_err());
        assert!(parse(&["db.json", "--frobnicate"]).is_err());
    }
}
