//! Shell-script stand-ins for `python3`, `git` and the environment's `python`.
//!
//! Every fake appends its command line, under the name it was invoked by, to
//! `$FAKE_LOG`. Exit codes are steered with
//! `FAKE_GIT_EXIT`, `FAKE_VENV_EXIT`, `FAKE_PIP_EXIT` and `FAKE_APP_EXIT`.
//! With `FAKE_GIT_PARTIAL` set, a failing clone leaves a half-written target behind.

pub const PYTHON3: &str = r#"#!/bin/sh
PATH=/usr/bin:/bin
echo "$(basename "$0") $*" >> "$FAKE_LOG"
if [ "$1" = "--version" ]; then
    echo "Python 3.12.1"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    code="${FAKE_VENV_EXIT:-0}"
    if [ "$code" != "0" ]; then
        exit "$code"
    fi
    mkdir -p "$3/bin"
    cp "$FAKE_VENV_PYTHON" "$3/bin/python"
    chmod +x "$3/bin/python"
    exit 0
fi
exit 2
"#;

pub const VENV_PYTHON: &str = r#"#!/bin/sh
PATH=/usr/bin:/bin
echo "venv-python $* VIRTUAL_ENV=$VIRTUAL_ENV" >> "$FAKE_LOG"
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    exit "${FAKE_PIP_EXIT:-0}"
fi
echo "AutoMV UI running"
exit "${FAKE_APP_EXIT:-0}"
"#;

pub const GIT: &str = r#"#!/bin/sh
PATH=/usr/bin:/bin
echo "git $*" >> "$FAKE_LOG"
if [ "$1" = "--version" ]; then
    echo "git version 2.43.0"
    exit 0
fi
if [ "$1" = "clone" ]; then
    code="${FAKE_GIT_EXIT:-0}"
    for last in "$@"; do :; done
    if [ "$code" != "0" ]; then
        if [ -n "$FAKE_GIT_PARTIAL" ]; then
            mkdir -p "$last"
            echo "interrupted" > "$last/half-cloned.txt"
        fi
        echo "fatal: unable to access repository" >&2
        exit "$code"
    fi
    mkdir -p "$last"
    printf '    music_name = "1"\n' > "$last/config.py"
    exit 0
fi
exit 1
"#;
