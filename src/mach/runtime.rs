use super::codec::{format_number, number_to_string, string_to_number};
use super::evaluate::{Evaluator, Slot};
use super::{Address, Frame, Listing, Options, Program, Stack, Statistics, Val, Var};
use crate::error;
use crate::lang::ast::{AcceptVisitor, Expression, PrintItem, Statement, Variable, Visitor};
use crate::lang::{line_string, split_line, Error, Line};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// ## Runtime
///
/// The runtime owns the listing and runs it. Output, input requests and
/// diagnostics come back as [`Event`]s from [`Runtime::execute`] in the
/// order they happened.

pub struct Runtime {
    listing: Listing,
    program: Program,
    vars: Var,
    frames: Stack<Frame>,
    options: Options,
    rng: StdRng,
    running: bool,
    current: Option<Address>,
    next: Option<Address>,
    ask: Option<usize>,
    input: Option<String>,
    cursor: usize,
    format: f64,
    print_buffer: String,
    last_line: Option<u16>,
    executed: usize,
    started: Option<Instant>,
    run_time: Duration,
    events: VecDeque<Event>,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Print(String),
    /// ASK wants a line. The prompt and whether input is upper-cased.
    Input(String, bool),
    Errors(Vec<Error>),
    Running,
    Stopped,
}

enum Flow {
    Next,
    Suspend,
    Quit,
    Stop,
}

const FRAME_LIMIT: usize = 4096;

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Options::default())
    }
}

impl Runtime {
    pub fn new(options: Options) -> Runtime {
        let rng = match options.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Runtime {
            listing: Listing::default(),
            program: Program::default(),
            vars: Var::new(),
            frames: Stack::new("TOO MANY DO OR FOR", FRAME_LIMIT),
            options,
            rng,
            running: false,
            current: None,
            next: None,
            ask: None,
            input: None,
            cursor: 0,
            format: 0.0,
            print_buffer: String::new(),
            last_line: None,
            executed: 0,
            started: None,
            run_time: Duration::default(),
            events: VecDeque::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.stop();
        self.listing = listing;
    }

    /// The line table of the last run.
    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn variables(&self) -> &Var {
        &self.vars
    }

    pub fn statements_executed(&self) -> usize {
        self.executed
    }

    /// Counts over the line table plus the length of the last run.
    pub fn statistics(&self) -> Option<Statistics> {
        let mut stats = Statistics::new(&self.program)?;
        stats.run_time = self.run_time;
        stats.statements_executed = self.executed;
        Some(stats)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Answers a waiting ASK or edits the listing. Returns true when the
    /// text was used.
    pub fn enter(&mut self, string: &str) -> bool {
        let string = string.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if self.running && self.ask.is_some() {
            self.input = Some(string.to_string());
            return true;
        }
        let line = Line::new(string);
        if line.is_direct() {
            if !line.is_empty() {
                self.report(error!(IllegalDirect));
            }
            return false;
        }
        self.stop();
        match self.listing.insert(line) {
            Ok(_) => true,
            Err(error) => {
                self.report(error);
                false
            }
        }
    }

    /// Builds the line table from the listing and starts at its first line.
    pub fn run(&mut self) {
        self.stop();
        self.program = Program::new(&self.listing);
        if !self.program.errors().is_empty() {
            let errors = self.program.errors().to_vec();
            for error in errors {
                self.report(error);
            }
            return;
        }
        if let Some(seed) = self.options.random_seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.vars.clear();
        let mut registrar = Registrar(Evaluator::new(&mut self.vars, &mut self.rng, false));
        for addr in 0..self.program.len() {
            if let Some(statement) = self.program.get(addr) {
                statement.accept(&mut registrar);
            }
        }
        self.frames.clear();
        self.cursor = 0;
        self.format = 0.0;
        self.last_line = None;
        self.executed = 0;
        self.next = if self.program.is_empty() { None } else { Some(0) };
        self.running = self.next.is_some();
        self.run_time = Duration::default();
        if self.running {
            self.started = Some(Instant::now());
        }
    }

    pub fn interrupt(&mut self) {
        if self.running {
            self.report(error!(Break));
            self.stop();
        }
    }

    /// Runs up to `cycles` statements and returns the first event.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            if !self.running {
                if let Some(event) = self.take_print() {
                    return event;
                }
                return Event::Stopped;
            }
            if self.ask.is_some() && self.input.is_none() {
                let prompt = std::mem::take(&mut self.print_buffer);
                return Event::Input(prompt, self.options.upper_case);
            }
            self.step();
        }
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        match self.take_print() {
            Some(event) => event,
            None => Event::Running,
        }
    }

    fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.run_time = started.elapsed();
        }
        self.running = false;
        self.current = None;
        self.next = None;
        self.ask = None;
        self.input = None;
    }

    fn take_print(&mut self) -> Option<Event> {
        if self.print_buffer.is_empty() {
            None
        } else {
            Some(Event::Print(std::mem::take(&mut self.print_buffer)))
        }
    }

    /// Queues a diagnostic against the current line.
    fn report(&mut self, error: Error) {
        let line = match self.current {
            Some(addr) => self.program.line_for_statement(addr),
            None => -1.0,
        };
        let error = if line >= 0.0 && error.is_direct() {
            let (group, step) = split_line(line);
            error.in_line_number(Some((group * 100 + step) as u16))
        } else {
            error
        };
        if let Some(event) = self.take_print() {
            self.events.push_back(event);
        }
        if let Some(Event::Errors(errors)) = self.events.back_mut() {
            errors.push(error);
        } else {
            self.events.push_back(Event::Errors(vec![error]));
        }
    }

    fn print(&mut self, s: &str) {
        self.print_buffer.push_str(s);
        for ch in s.chars() {
            match ch {
                '\n' | '\r' => self.cursor = 0,
                _ => self.cursor += 1,
            }
        }
    }

    fn successor(&self, addr: Address) -> Option<Address> {
        if addr + 1 < self.program.len() {
            Some(addr + 1)
        } else {
            None
        }
    }

    fn step(&mut self) {
        let addr = match self.next {
            Some(addr) => addr,
            None => return self.stop(),
        };
        let statement = match self.program.get(addr) {
            Some(statement) => statement.clone(),
            None => return self.stop(),
        };
        self.current = Some(addr);
        self.next = self.successor(addr);
        if self.options.trace_lines && self.ask.is_none() {
            let code = self.program.line_code_for(addr);
            if code != self.last_line {
                self.last_line = code;
                if let Some(code) = code {
                    self.print_buffer.push_str(&format!("[{}]\n", line_string(code)));
                }
            }
        }
        let depth = self.frames.len();
        match self.perform(addr, &statement) {
            Flow::Next => {
                self.executed += 1;
                if self.frames.len() == depth {
                    self.resolve_boundary(addr);
                }
            }
            Flow::Suspend => self.next = Some(addr),
            Flow::Quit => {
                self.executed += 1;
                self.stop();
            }
            Flow::Stop => self.stop(),
        }
    }

    fn perform(&mut self, addr: Address, statement: &Statement) -> Flow {
        use Statement::*;
        match statement {
            Ask(_, items) => return self.r#ask(items),
            Comment(_) => {}
            Do(_, expr) => self.r#do(addr, expr),
            Erase(_) => self.vars.clear(),
            For(_, var, begin, end, step) => self.r#for(addr, var, begin, end, step),
            Goto(_, expr) => self.r#goto(expr),
            If(_, expr, less, zero, more) => self.r#if(expr, *less, *zero, *more),
            Quit(_) => return Flow::Quit,
            Return(_) => self.r#return(),
            Set(_, var, expr) => self.r#set(var, expr),
            Type(_, items) => {
                for item in items {
                    self.print_item(item);
                }
            }
            Varlist(_) => self.r#varlist(),
            Unimplemented(_, word) => {
                self.report(error!(UnimplementedStatement; word.name()));
                return Flow::Stop;
            }
        }
        Flow::Next
    }

    /// After each statement: a loop on top steps at every end of line, a
    /// call on top returns at the end of its line or group. Only the top
    /// frame is looked at; a finished loop falls through.
    fn resolve_boundary(&mut self, addr: Address) {
        let (this_group, this_step) = self.group_step(Some(addr));
        let (next_group, next_step) = self.group_step(self.successor(addr));
        if this_group == next_group && this_step == next_step {
            return;
        }
        match self.frames.last().cloned() {
            Some(Frame::Loop {
                head, end, step, ..
            }) => {
                let for_statement = match self.program.get(head) {
                    Some(statement) => statement.clone(),
                    None => return self.report(error!(InternalError; "LOOP HEAD")),
                };
                let index = match for_statement.as_ref() {
                    Statement::For(_, var, ..) => var,
                    _ => return self.report(error!(InternalError; "LOOP HEAD")),
                };
                let value = self.fetch(index) + step;
                self.store(index, value);
                if Frame::in_range(value, end, step) {
                    self.next = Some(head + 1);
                } else {
                    let _ = self.frames.pop();
                }
            }
            Some(Frame::Call { group_only, .. }) => {
                let returns = if group_only {
                    this_group != next_group
                } else {
                    this_group != next_group && this_step != next_step
                };
                if returns {
                    self.return_from_call();
                }
            }
            None => {}
        }
    }

    /// Pops the call on top and continues after the DO that made it.
    fn return_from_call(&mut self) {
        if let Ok(Frame::Call { origin, .. }) = self.frames.pop() {
            self.next = self.successor(origin);
        }
    }

    fn group_step(&self, addr: Option<Address>) -> (i32, i32) {
        match addr.and_then(|addr| self.program.line_code_for(addr)) {
            Some(code) => ((code / 100) as i32, (code % 100) as i32),
            None => (-1, 0),
        }
    }

    fn evaluate(&mut self, expr: &Expression) -> Val {
        let mut eval = Evaluator::new(&mut self.vars, &mut self.rng, self.running);
        let val = eval.evaluate(expr);
        for error in eval.finish() {
            self.report(error);
        }
        val
    }

    fn fetch(&mut self, var: &Variable) -> f64 {
        let mut eval = Evaluator::new(&mut self.vars, &mut self.rng, self.running);
        let val = eval.fetch(var);
        for error in eval.finish() {
            self.report(error);
        }
        val
    }

    fn store(&mut self, var: &Variable, value: f64) {
        let mut eval = Evaluator::new(&mut self.vars, &mut self.rng, self.running);
        if let Some(slot) = eval.resolve(var) {
            eval.store(&slot, value);
        }
        for error in eval.finish() {
            self.report(error);
        }
    }

    fn jump(&mut self, target: f64) {
        match self.program.find_line(target) {
            Ok(addr) => self.next = Some(addr),
            Err(error) => self.report(error),
        }
    }

    fn print_item(&mut self, item: &PrintItem) {
        match item {
            PrintItem::Expression(expr) => match self.evaluate(expr) {
                Val::Number(n) => {
                    let s = if self.format == 0.0 {
                        format!("{} ", number_to_string(n))
                    } else {
                        format_number(n, self.format)
                    };
                    self.print(&s);
                }
                Val::String(s) => self.print(&s),
            },
            PrintItem::Newline(_) => self.print("\n"),
            PrintItem::Return(_) => self.print("\r"),
            PrintItem::Tab(_) => {
                let tab = self.options.tab_columns;
                if tab > 0 {
                    let pad = (tab - self.cursor % tab) % tab;
                    self.print(&" ".repeat(pad));
                }
            }
            PrintItem::Format(_, format) => self.format = *format,
        }
    }

    fn r#ask(&mut self, items: &[PrintItem]) -> Flow {
        if self.ask.is_none() {
            if let Some(event) = self.take_print() {
                self.events.push_back(event);
            }
        }
        let start = self.ask.unwrap_or(0);
        for (index, item) in items.iter().enumerate().skip(start) {
            let var = match item {
                PrintItem::Expression(Expression::Var(_, var)) => var,
                _ => {
                    self.print_item(item);
                    continue;
                }
            };
            let input = match self.input.take() {
                Some(input) if self.ask == Some(index) => input,
                _ => {
                    if self.options.ask_colon {
                        self.print(":");
                    }
                    self.ask = Some(index);
                    return Flow::Suspend;
                }
            };
            self.ask = None;
            self.cursor = 0;
            let input = if self.options.upper_case {
                input.to_ascii_uppercase()
            } else {
                input
            };
            let value = match string_to_number(input.trim()) {
                Ok(value) => value,
                Err(error) => {
                    self.report(error);
                    0.0
                }
            };
            self.store(var, value);
        }
        Flow::Next
    }

    fn r#do(&mut self, addr: Address, expr: &Expression) {
        let target = self.evaluate(expr).number();
        let entry = match self.program.find_line(target) {
            Ok(entry) => entry,
            Err(error) => return self.report(error),
        };
        let (_, step) = split_line(target);
        let frame = Frame::Call {
            origin: addr,
            target,
            group_only: step == 0,
        };
        match self.frames.push(frame) {
            Ok(()) => self.next = Some(entry),
            Err(error) => self.report(error),
        }
    }

    fn r#for(
        &mut self,
        addr: Address,
        var: &Variable,
        begin: &Expression,
        end: &Expression,
        step: &Option<Expression>,
    ) {
        let begin = self.evaluate(begin).number();
        let end = self.evaluate(end).number();
        let step = match step {
            Some(step) => self.evaluate(step).number(),
            None => 1.0,
        };
        self.store(var, begin);
        let frame = Frame::Loop {
            head: addr,
            begin,
            end,
            step,
        };
        if let Err(error) = self.frames.push(frame) {
            self.report(error);
        }
    }

    fn r#goto(&mut self, expr: &Option<Expression>) {
        match expr {
            Some(expr) => {
                let target = self.evaluate(expr).number();
                self.jump(target);
            }
            None => self.next = if self.program.is_empty() { None } else { Some(0) },
        }
    }

    fn r#if(&mut self, expr: &Expression, less: Option<f64>, zero: Option<f64>, more: Option<f64>) {
        let n = self.evaluate(expr).number();
        let target = if n < 0.0 {
            less
        } else if n == 0.0 {
            zero
        } else if n > 0.0 {
            more
        } else {
            None
        };
        if let Some(target) = target {
            self.jump(target);
        }
    }

    fn r#return(&mut self) {
        match self.frames.last() {
            Some(Frame::Call { .. }) => self.return_from_call(),
            _ => self.report(error!(ReturnWithoutDo)),
        }
    }

    fn r#set(&mut self, var: &Variable, expr: &Expression) {
        let mut eval = Evaluator::new(&mut self.vars, &mut self.rng, self.running);
        let slot: Option<Slot> = eval.resolve(var);
        match eval.evaluate(expr) {
            Val::Number(n) => {
                if let Some(slot) = slot {
                    eval.store(&slot, n);
                }
            }
            Val::String(_) => {
                let mut errors = eval.finish();
                errors.push(error!(TypeMismatch));
                for error in errors {
                    self.report(error);
                }
                return;
            }
        }
        for error in eval.finish() {
            self.report(error);
        }
    }

    fn r#varlist(&mut self) {
        let mut s = String::new();
        for name in self.vars.names() {
            s.push_str(&format!("\n{} ", name));
        }
        s.push_str("\n\n");
        self.print(&s);
    }
}

struct Registrar<'a>(Evaluator<'a>);

impl<'a> Visitor for Registrar<'a> {
    fn visit_variable(&mut self, var: &Variable) {
        self.0.resolve(var);
    }
}
