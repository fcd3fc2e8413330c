/*!
# Commands

## BASIC mode
| Command       | Purpose                                                  |
|---------------|----------------------------------------------------------|
| `NEW`         | Erase the program.                                       |
| `LIST`        | Show the program in line number order.                   |
| `RUN`         | Run the program.                                         |
| `SAVE <file>` | Write the program, one `<number> <statement>` per line.  |
| `LOAD <file>` | Replace the program with one read from a file. Lines that don't start with a number are ignored. |
| `EXIT`        | Return to the command prompt.                            |

`NEW`, `LIST`, `RUN`, `SAVE` and `LOAD` also work at the `]` prompt.

## Command prompt
| Command              | Purpose                            |
|----------------------|------------------------------------|
| `CAT`                | List files                         |
| `TYPE <file>`        | Show file contents                 |
| `RUN <file>`         | Run a python script                |
| `DELETE <file>`      | Delete a file                      |
| `RENAME <old> <new>` | Rename a file                      |
| `COPY <src> <dest>`  | Copy a file                        |
| `MKDIR <name>`       | Create directory                   |
| `RMDIR <name>`       | Remove directory                   |
| `CLS`                | Clear screen                       |
| `TIME`               | Show current time                  |
| `SYSINFO`            | Show system info                   |
| `ECHO <text>`        | Print text                         |
| `COLOR <r> <g> <b>`  | Set the prompt color               |
| `BEEP`               | Ring the terminal bell             |
| `BASIC`              | Enter BASIC mode                   |
| `HELP`               | List commands                      |
| `EXIT` / `QUIT`      | Leave                              |
*/
