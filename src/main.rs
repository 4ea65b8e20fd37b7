use std::{env, fs::read_to_string, process::exit, time::Instant};

use transpiler::{
    codegen, display_error,
    interpreter::interpreter::Interpreter,
    lexer::{cursor::Cursor, scanner::Scanner},
    normalize_line_endings,
    parser::parser::Parser,
    validator::validator::validate_stmt,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 || (args.len() == 3 && args[2] != "--interpret") {
        eprintln!("Usage: transpiler <source-file> [--interpret]");
        exit(1);
    }

    let file_path: &str = &args[1];
    let run = args.len() == 3;

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };
    let source = normalize_line_endings(&file_contents);

    let start = Instant::now();

    let scanner = Scanner::new(Cursor::new(&source));
    let mut parser = match Parser::new(scanner) {
        Ok(parser) => parser,
        Err(error) => {
            display_error(&error, &source, file_path);
            exit(1);
        }
    };
    let program = match parser.parse() {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, file_path);
            exit(1);
        }
    };

    println!("Parsed in {:?}", start.elapsed());

    let validate_start = Instant::now();
    if let Err(error) = validate_stmt(&program) {
        display_error(&error, &source, file_path);
        exit(1);
    }

    println!("Validated in {:?}", validate_start.elapsed());

    if run {
        let run_start = Instant::now();
        let mut interpreter = Interpreter::new();
        if let Err(error) = interpreter.interpret(&program) {
            display_error(&error, &source, file_path);
            exit(1);
        }

        println!("Interpreted in {:?}", run_start.elapsed());
        println!("Total time: {:?}", start.elapsed());

        for line in interpreter.output {
            println!("{}", line);
        }
    } else {
        let generate_start = Instant::now();
        let generated = codegen::generate(&program);

        println!("Generated in {:?}", generate_start.elapsed());
        println!("Total time: {:?}", start.elapsed());

        print!("{}", generated);
    }
}
